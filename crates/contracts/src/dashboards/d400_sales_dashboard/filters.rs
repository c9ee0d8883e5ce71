use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows per page. The backend honours any `limit`, the dashboard always sends this one.
pub const PAGE_SIZE: u32 = 10;

/// Columns the backend can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    #[default]
    Date,
    CustomerId,
    CustomerName,
    Gender,
    Age,
    ProductCategory,
    Quantity,
    TotalAmount,
    CustomerRegion,
    ProductId,
    EmployeeName,
}

impl SortField {
    pub const ALL: [SortField; 12] = [
        SortField::Id,
        SortField::Date,
        SortField::CustomerId,
        SortField::CustomerName,
        SortField::Gender,
        SortField::Age,
        SortField::ProductCategory,
        SortField::Quantity,
        SortField::TotalAmount,
        SortField::CustomerRegion,
        SortField::ProductId,
        SortField::EmployeeName,
    ];

    /// Wire name, as used in `sortBy`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Date => "date",
            SortField::CustomerId => "customerId",
            SortField::CustomerName => "customerName",
            SortField::Gender => "gender",
            SortField::Age => "age",
            SortField::ProductCategory => "productCategory",
            SortField::Quantity => "quantity",
            SortField::TotalAmount => "totalAmount",
            SortField::CustomerRegion => "customerRegion",
            SortField::ProductId => "productId",
            SortField::EmployeeName => "employeeName",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Direction used when a column is selected for the first time
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortField::TotalAmount | SortField::Date | SortField::Quantity | SortField::Age => {
                SortOrder::Desc
            }
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Multi-valued filter fields. The UI selects at most one value per list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterList {
    CustomerRegion,
    Gender,
    ProductCategory,
    Tags,
    PaymentMethod,
}

/// The user's filter choices. Empty lists and `None` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesFilters {
    pub customer_region: Vec<String>,
    pub gender: Vec<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub product_category: Vec<String>,
    pub tags: Vec<String>,
    pub payment_method: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SalesFilters {
    pub fn list(&self, list: FilterList) -> &[String] {
        match list {
            FilterList::CustomerRegion => &self.customer_region,
            FilterList::Gender => &self.gender,
            FilterList::ProductCategory => &self.product_category,
            FilterList::Tags => &self.tags,
            FilterList::PaymentMethod => &self.payment_method,
        }
    }

    fn list_mut(&mut self, list: FilterList) -> &mut Vec<String> {
        match list {
            FilterList::CustomerRegion => &mut self.customer_region,
            FilterList::Gender => &mut self.gender,
            FilterList::ProductCategory => &mut self.product_category,
            FilterList::Tags => &mut self.tags,
            FilterList::PaymentMethod => &mut self.payment_method,
        }
    }

    /// First selected value of a list, or `""` when nothing is selected
    pub fn selected(&self, list: FilterList) -> &str {
        self.list(list).first().map(String::as_str).unwrap_or("")
    }

    /// Replaces the list with a single value; an empty value clears it.
    pub fn select_single(&mut self, list: FilterList, value: &str) {
        let target = self.list_mut(list);
        target.clear();
        if !value.is_empty() {
            target.push(value.to_string());
        }
    }

    /// Number of criteria currently constraining the result set
    pub fn active_count(&self) -> usize {
        let lists = [
            FilterList::CustomerRegion,
            FilterList::Gender,
            FilterList::ProductCategory,
            FilterList::Tags,
            FilterList::PaymentMethod,
        ]
        .into_iter()
        .filter(|l| !self.list(*l).is_empty())
        .count();

        let scalars = [
            self.min_age.is_some(),
            self.max_age.is_some(),
            self.start_date.is_some(),
            self.end_date.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();

        lists + scalars
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Parses the text of an age input. Blank or non-numeric input means "unbounded".
pub fn parse_age(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Parses the value of an `<input type="date">` (`YYYY-MM-DD`).
pub fn parse_filter_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Everything the listing request depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    pub filters: SalesFilters,
    /// Effective (already debounced) search text
    pub search: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    /// 1-based
    pub page: u32,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            filters: SalesFilters::default(),
            search: String::new(),
            sort_by: SortField::Date,
            sort_order: SortOrder::Desc,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_wire_names() {
        assert_eq!(SortField::CustomerName.as_str(), "customerName");
        assert_eq!(SortField::parse("totalAmount"), Some(SortField::TotalAmount));
        assert_eq!(SortField::parse("phoneNumber"), None);
        assert_eq!(
            serde_json::to_string(&SortField::EmployeeName).unwrap(),
            "\"employeeName\""
        );
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }

    #[test]
    fn test_default_order_per_field() {
        assert_eq!(SortField::TotalAmount.default_order(), SortOrder::Desc);
        assert_eq!(SortField::Date.default_order(), SortOrder::Desc);
        assert_eq!(SortField::Quantity.default_order(), SortOrder::Desc);
        assert_eq!(SortField::Age.default_order(), SortOrder::Desc);
        assert_eq!(SortField::CustomerName.default_order(), SortOrder::Asc);
        assert_eq!(SortField::Id.default_order(), SortOrder::Asc);
    }

    #[test]
    fn test_select_single() {
        let mut filters = SalesFilters::default();
        filters.select_single(FilterList::Gender, "Female");
        assert_eq!(filters.gender, vec!["Female"]);
        assert_eq!(filters.selected(FilterList::Gender), "Female");

        filters.select_single(FilterList::Gender, "Male");
        assert_eq!(filters.gender, vec!["Male"]);

        filters.select_single(FilterList::Gender, "");
        assert!(filters.gender.is_empty());
        assert_eq!(filters.selected(FilterList::Gender), "");
    }

    #[test]
    fn test_active_count() {
        let mut filters = SalesFilters::default();
        assert!(filters.is_empty());

        filters.select_single(FilterList::Tags, "organic");
        filters.min_age = Some(18);
        filters.end_date = parse_filter_date("2024-12-31");
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_age(" 25 "), Some(25));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(
            parse_filter_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_filter_date(""), None);
    }
}
