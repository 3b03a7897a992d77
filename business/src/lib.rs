pub mod application {
    pub mod expiry {
        pub mod get_alerts;
        pub mod get_summary;
        pub mod list_products;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod reminder {
        pub mod cancel;
        pub mod schedule;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod expiry {
        pub mod classifier;
        pub mod errors;
        pub mod filter;
        pub mod use_cases {
            pub mod get_alerts;
            pub mod get_summary;
            pub mod list_products;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod reminder {
        pub mod errors;
        pub mod model;
        pub mod scheduler;
        pub mod services;
        pub mod use_cases {
            pub mod cancel;
            pub mod schedule;
        }
    }
}
