use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One sales transaction as returned by `GET /api/sales`.
///
/// The backend owns this record; the dashboard only displays it. Every field
/// is optional and empty strings are treated as absent. Identifiers and phone
/// numbers may arrive as JSON numbers, numeric fields as numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecordDto {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "loose_string")]
    pub product_category: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "loose_string")]
    pub customer_region: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub employee_name: Option<String>,
}

/// Pagination block of the listing response.
///
/// Counts may arrive as numeric strings or `null`; anything unreadable is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    #[serde(default, deserialize_with = "loose_count")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "loose_count")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "loose_count")]
    pub total_records: u64,
}

/// Raw body of `GET /api/sales` and `GET /api/sales/optimized`.
///
/// Either `data` + `pagination` or `error` is expected, but nothing is enforced
/// on the wire; see [`SalesListResponse::into_page`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesListResponse {
    #[serde(default)]
    pub data: Option<Vec<SalesRecordDto>>,
    #[serde(default)]
    pub pagination: Option<PaginationDto>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Normalized pagination info. `total_pages` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

/// A listing response after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct SalesPage {
    pub records: Vec<SalesRecordDto>,
    /// `None` when the backend sent no pagination block; callers keep their
    /// previous totals in that case.
    pub pagination: Option<PageInfo>,
}

impl SalesListResponse {
    /// Turns the raw body into a [`SalesPage`], or the backend-reported error.
    ///
    /// A missing `currentPage` (zero) falls back to `requested_page`.
    pub fn into_page(self, requested_page: u32) -> Result<SalesPage, String> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(error);
        }

        let pagination = self.pagination.map(|p| PageInfo {
            current_page: if p.current_page == 0 {
                requested_page
            } else {
                p.current_page
            },
            total_pages: p.total_pages.max(1),
            total_records: p.total_records,
        });

        Ok(SalesPage {
            records: self.data.unwrap_or_default(),
            pagination,
        })
    }
}

/// Body of `GET /api/sales/filters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsDto {
    #[serde(default)]
    pub customer_regions: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub product_categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn loose_count<'de, D, N>(deserializer: D) -> Result<N, D::Error>
where
    D: Deserializer<'de>,
    N: TryFrom<u64> + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let count = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|c| N::try_from(c).ok()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_mixed_types() {
        let json = r#"{
            "id": 1042,
            "date": "2024-03-15",
            "customerName": "Asha Rao",
            "phoneNumber": 919876543210,
            "age": "34",
            "quantity": 3,
            "totalAmount": 12500.5,
            "productId": ""
        }"#;
        let record: SalesRecordDto = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_deref(), Some("1042"));
        assert_eq!(record.phone_number.as_deref(), Some("919876543210"));
        assert_eq!(record.age, Some(34.0));
        assert_eq!(record.quantity, Some(3.0));
        assert_eq!(record.total_amount, Some(12500.5));
        assert_eq!(record.product_id, None);
        assert_eq!(record.employee_name, None);
    }

    #[test]
    fn test_record_with_nulls() {
        let json = r#"{"id": null, "age": null, "gender": "Female"}"#;
        let record: SalesRecordDto = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.age, None);
        assert_eq!(record.gender.as_deref(), Some("Female"));
    }

    #[test]
    fn test_into_page_clamps_total_pages() {
        let json = r#"{
            "data": [],
            "pagination": {"currentPage": 1, "totalPages": 0, "totalRecords": 0}
        }"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(1).unwrap();

        assert!(page.records.is_empty());
        assert_eq!(
            page.pagination,
            Some(PageInfo {
                current_page: 1,
                total_pages: 1,
                total_records: 0
            })
        );
    }

    #[test]
    fn test_null_total_pages_clamps_to_one() {
        let json = r#"{
            "data": [{"id": "T-1"}],
            "pagination": {"currentPage": 1, "totalPages": null, "totalRecords": 0}
        }"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(1).unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.pagination.unwrap().total_pages, 1);
    }

    #[test]
    fn test_pagination_counts_as_strings() {
        let json = r#"{
            "data": [],
            "pagination": {"currentPage": "3", "totalPages": "12", "totalRecords": "115"}
        }"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(5).unwrap();

        assert_eq!(
            page.pagination,
            Some(PageInfo {
                current_page: 3,
                total_pages: 12,
                total_records: 115
            })
        );
    }

    #[test]
    fn test_unreadable_current_page_falls_back_to_requested() {
        let json = r#"{
            "data": [],
            "pagination": {"currentPage": "abc", "totalPages": 4, "totalRecords": 40}
        }"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(2).unwrap();
        assert_eq!(page.pagination.unwrap().current_page, 2);
    }

    #[test]
    fn test_into_page_keeps_backend_current_page() {
        let json = r#"{
            "data": [{"id": "T-1"}],
            "pagination": {"currentPage": 7, "totalPages": 7, "totalRecords": 64}
        }"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(9).unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.pagination.unwrap().current_page, 7);
    }

    #[test]
    fn test_into_page_reports_backend_error() {
        let json = r#"{"error": "Invalid sort field"}"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_page(1).unwrap_err(), "Invalid sort field");
    }

    #[test]
    fn test_into_page_ignores_empty_error() {
        let json = r#"{"error": "", "data": null}"#;
        let response: SalesListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page(3).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.pagination, None);
    }

    #[test]
    fn test_filter_options_missing_arrays() {
        let json = r#"{"genders": ["Male", "Female"]}"#;
        let options: FilterOptionsDto = serde_json::from_str(json).unwrap();
        assert_eq!(options.genders, vec!["Male", "Female"]);
        assert!(options.customer_regions.is_empty());
        assert!(options.payment_methods.is_empty());
    }
}
