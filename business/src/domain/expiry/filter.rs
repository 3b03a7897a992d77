use chrono::NaiveDate;
use uuid::Uuid;

use super::classifier::{EXPIRING_SOON_DAYS, ExpiryLevel, ExpiryStatus, classify_product};
use super::errors::ExpiryError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::StorageUnit;

/// Lifecycle tab a product list is viewed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Everything that has not expired yet.
    #[default]
    All,
    Expired,
    Expiring,
}

impl Lifecycle {
    pub fn admits(&self, level: ExpiryLevel) -> bool {
        match self {
            Lifecycle::All => level != ExpiryLevel::Expired,
            Lifecycle::Expired => level == ExpiryLevel::Expired,
            Lifecycle::Expiring => level == ExpiryLevel::ExpiringSoon,
        }
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifecycle::All => write!(f, "all"),
            Lifecycle::Expired => write!(f, "expired"),
            Lifecycle::Expiring => write!(f, "expiring"),
        }
    }
}

impl std::str::FromStr for Lifecycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Lifecycle::All),
            "expired" => Ok(Lifecycle::Expired),
            "expiring" => Ok(Lifecycle::Expiring),
            _ => Err(format!("Invalid lifecycle: {}", s)),
        }
    }
}

/// What to do when a product in a batch has an unparseable expiry date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave the product out and record its id.
    #[default]
    SkipAndContinue,
    /// Stop at the first bad product.
    FailFast,
}

/// Criteria for a product list. All set criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub lifecycle: Lifecycle,
    pub unit: Option<StorageUnit>,
    pub search: Option<String>,
}

impl ProductFilter {
    fn search_query(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase)
    }
}

/// A product together with its status at the evaluation date.
#[derive(Debug, Clone)]
pub struct ClassifiedProduct {
    pub product: Product,
    pub status: ExpiryStatus,
}

/// Products selected from a batch, in input order, plus the ids of
/// products that could not be classified.
#[derive(Debug, Clone, Default)]
pub struct ProductSelection {
    pub products: Vec<ClassifiedProduct>,
    pub skipped: Vec<Uuid>,
}

/// Aggregate counts for summary banners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub skipped: Vec<Uuid>,
}

struct Classified<'a> {
    entries: Vec<(&'a Product, ExpiryStatus)>,
    skipped: Vec<Uuid>,
}

fn classify_all(
    products: &[Product],
    today: NaiveDate,
    policy: FailurePolicy,
) -> Result<Classified<'_>, ExpiryError> {
    let mut classified = Classified {
        entries: Vec::with_capacity(products.len()),
        skipped: Vec::new(),
    };

    for product in products {
        match classify_product(product, today) {
            Ok(status) => classified.entries.push((product, status)),
            Err(_) if policy == FailurePolicy::SkipAndContinue => {
                classified.skipped.push(product.id)
            }
            Err(_) => {
                return Err(ExpiryError::InvalidProductDate {
                    product_id: product.id,
                    value: product.expiry_date.clone(),
                });
            }
        }
    }

    Ok(classified)
}

fn select(
    products: &[Product],
    today: NaiveDate,
    policy: FailurePolicy,
    keep: impl Fn(&Product, &ExpiryStatus) -> bool,
) -> Result<ProductSelection, ExpiryError> {
    let classified = classify_all(products, today, policy)?;

    let products = classified
        .entries
        .into_iter()
        .filter(|(product, status)| keep(*product, status))
        .map(|(product, status)| ClassifiedProduct {
            product: product.clone(),
            status,
        })
        .collect();

    Ok(ProductSelection {
        products,
        skipped: classified.skipped,
    })
}

fn matches_search(product: &Product, query: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query);

    contains(product.name.as_str())
        || [&product.category, &product.barcode, &product.location]
            .into_iter()
            .flatten()
            .any(|field| contains(field.as_str()))
}

/// Narrows a product list by lifecycle, unit and free-text search.
///
/// Input order is preserved; callers sort beforehand (see [`sort_by_expiry`]).
/// The search is a case-insensitive substring match against name, category,
/// barcode and location. Missing optional fields simply do not match.
pub fn filter_products(
    products: &[Product],
    filter: &ProductFilter,
    today: NaiveDate,
    policy: FailurePolicy,
) -> Result<ProductSelection, ExpiryError> {
    let query = filter.search_query();

    select(products, today, policy, |product, status| {
        filter.lifecycle.admits(status.level)
            && filter.unit.is_none_or(|unit| product.unit == Some(unit))
            && query
                .as_deref()
                .is_none_or(|query| matches_search(product, query))
    })
}

/// Counts expired and expiring-soon products over the whole collection.
pub fn count_by_status(
    products: &[Product],
    today: NaiveDate,
    policy: FailurePolicy,
) -> Result<StatusSummary, ExpiryError> {
    let classified = classify_all(products, today, policy)?;

    let mut summary = StatusSummary {
        skipped: classified.skipped,
        ..StatusSummary::default()
    };
    for (_, status) in &classified.entries {
        match status.level {
            ExpiryLevel::Expired => summary.expired += 1,
            ExpiryLevel::ExpiringSoon => summary.expiring_soon += 1,
            ExpiryLevel::Good => {}
        }
    }

    Ok(summary)
}

/// Products that need attention: expired or expiring within 30 days.
pub fn attention_list(
    products: &[Product],
    today: NaiveDate,
    policy: FailurePolicy,
) -> Result<ProductSelection, ExpiryError> {
    select(products, today, policy, |_, status| {
        status.days_remaining <= EXPIRING_SOON_DAYS
    })
}

/// Stable sort by expiry date ascending. Unparseable dates go last.
pub fn sort_by_expiry(products: &mut [Product]) {
    products.sort_by_cached_key(|product| match product.parsed_expiry_date() {
        Ok(date) => (false, Some(date)),
        Err(_) => (true, None),
    });
}
