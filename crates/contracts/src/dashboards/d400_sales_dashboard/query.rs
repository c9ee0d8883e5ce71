use chrono::NaiveDate;
use serde::Serialize;

use super::filters::{SalesQuery, SortField, SortOrder, PAGE_SIZE};
use super::policy::FetchPlan;

/// Query parameters of `GET /api/sales`.
///
/// Optional fields are skipped when `None`, so an empty criterion never
/// reaches the backend. List filters are comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesListParams {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl SalesListParams {
    pub fn from_query(query: &SalesQuery) -> Self {
        let filters = &query.filters;
        let search = query.search.trim();

        Self {
            page: query.page.max(1),
            limit: PAGE_SIZE,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
            search: (!search.is_empty()).then(|| search.to_string()),
            customer_region: join_list(&filters.customer_region),
            gender: join_list(&filters.gender),
            product_category: join_list(&filters.product_category),
            tags: join_list(&filters.tags),
            payment_method: join_list(&filters.payment_method),
            min_age: filters.min_age,
            max_age: filters.max_age,
            start_date: filters.start_date,
            end_date: filters.end_date,
        }
    }

    /// Applies the page and forced sort of a [`FetchPlan`].
    pub fn with_plan(mut self, plan: &FetchPlan) -> Self {
        self.page = plan.page;
        if let Some((field, order)) = plan.forced_sort {
            self.sort_by = field;
            self.sort_order = order;
        }
        self
    }
}

fn join_list(values: &[String]) -> Option<String> {
    let joined = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::super::filters::{parse_filter_date, FilterList, SalesFilters};
    use super::super::policy::plan_for_page;
    use super::*;

    #[test]
    fn test_defaults_only_required_fields() {
        let params = SalesListParams::from_query(&SalesQuery::default());
        let json = serde_json::to_value(&params).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert_eq!(keys.len(), 4);
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 10);
        assert_eq!(json["sortBy"], "date");
        assert_eq!(json["sortOrder"], "desc");
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let mut filters = SalesFilters::default();
        filters.customer_region = vec![String::new(), "  ".to_string()];
        let query = SalesQuery {
            filters,
            search: "   ".to_string(),
            ..SalesQuery::default()
        };
        let params = SalesListParams::from_query(&query);

        assert_eq!(params.search, None);
        assert_eq!(params.customer_region, None);
        assert_eq!(params.min_age, None);
        assert_eq!(params.start_date, None);
    }

    #[test]
    fn test_all_filters_present() {
        let mut filters = SalesFilters::default();
        filters.select_single(FilterList::CustomerRegion, "North");
        filters.select_single(FilterList::Gender, "Female");
        filters.select_single(FilterList::ProductCategory, "Beauty");
        filters.select_single(FilterList::PaymentMethod, "UPI");
        filters.tags = vec!["organic".to_string(), "skincare".to_string()];
        filters.min_age = Some(18);
        filters.max_age = Some(40);
        filters.start_date = parse_filter_date("2023-01-01");
        filters.end_date = parse_filter_date("2023-12-31");

        let query = SalesQuery {
            filters,
            search: "Asha".to_string(),
            sort_by: SortField::TotalAmount,
            sort_order: SortOrder::Asc,
            page: 3,
        };
        let json = serde_json::to_value(SalesListParams::from_query(&query)).unwrap();

        assert_eq!(json["page"], 3);
        assert_eq!(json["sortBy"], "totalAmount");
        assert_eq!(json["sortOrder"], "asc");
        assert_eq!(json["search"], "Asha");
        assert_eq!(json["customerRegion"], "North");
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["productCategory"], "Beauty");
        assert_eq!(json["paymentMethod"], "UPI");
        assert_eq!(json["tags"], "organic,skincare");
        assert_eq!(json["minAge"], 18);
        assert_eq!(json["maxAge"], 40);
        assert_eq!(json["startDate"], "2023-01-01");
        assert_eq!(json["endDate"], "2023-12-31");
    }

    #[test]
    fn test_large_page_forces_id_sort() {
        let query = SalesQuery {
            sort_by: SortField::CustomerName,
            sort_order: SortOrder::Desc,
            page: 60_000,
            ..SalesQuery::default()
        };
        let plan = plan_for_page(query.page);
        let params = SalesListParams::from_query(&query).with_plan(&plan);

        assert_eq!(params.page, 60_000);
        assert_eq!(params.sort_by, SortField::Id);
        assert_eq!(params.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_small_page_keeps_sort() {
        let query = SalesQuery {
            sort_by: SortField::Age,
            sort_order: SortOrder::Asc,
            page: 50_000,
            ..SalesQuery::default()
        };
        let params = SalesListParams::from_query(&query).with_plan(&plan_for_page(query.page));

        assert_eq!(params.sort_by, SortField::Age);
        assert_eq!(params.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_page_zero_sanitized() {
        let query = SalesQuery {
            page: 0,
            ..SalesQuery::default()
        };
        assert_eq!(SalesListParams::from_query(&query).page, 1);
    }
}
