use serde::{Deserialize, Deserializer};

use crate::browse::filters::{Facet, FilterSelection};

/// Deserialize optional string, treating empty strings as None
fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Deserialize the page number leniently: absent, unparseable or
/// non-positive values all resolve to page 1 instead of failing the request.
fn deserialize_lenient_page<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(parse_page(raw.as_deref()))
}

fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

fn default_page() -> usize {
    1
}

/// Browse query parameters as they appear in the URL
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,
    #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
    pub page: usize,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub diet: Option<String>,
}

/// Canonical browse state derived from the URL. The URL is the source of
/// truth; this struct is the parsed form of it, and `href` is the inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseQuery {
    /// 1-based page, always >= 1
    pub page: usize,
    pub query: String,
    pub filters: FilterSelection,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            filters: FilterSelection::default(),
        }
    }
}

impl BrowseQuery {
    pub fn from_params(params: BrowseParams) -> Self {
        let filters = FilterSelection {
            difficulty: split_facet(params.difficulty.as_deref()),
            cooking_time: params.time,
            cuisine: split_facet(params.cuisine.as_deref()),
            dietary: split_facet(params.diet.as_deref()),
        };

        Self {
            page: params.page.max(1),
            query: params.q.unwrap_or_default(),
            filters,
        }
    }

    /// Navigate to another page, keeping the search term and filters
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Submit a new search. A new search always resolves to page 1.
    pub fn with_search(&self, query: &str) -> Self {
        Self {
            page: 1,
            query: query.to_string(),
            filters: self.filters.clone(),
        }
    }

    /// Toggle one filter chip, keeping page and search term
    pub fn with_filter_toggled(&self, facet: Facet, value: &str) -> Self {
        Self {
            filters: self.filters.toggled(facet, value),
            ..self.clone()
        }
    }

    /// Drop all filters, keeping page and search term
    pub fn without_filters(&self) -> Self {
        Self {
            filters: FilterSelection::default(),
            ..self.clone()
        }
    }

    /// The search term to forward to the gateway, if any
    pub fn search_term(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// The gateway's zero-based page index
    pub fn zero_based_page(&self) -> usize {
        self.page - 1
    }

    /// Serialize back into a browse URL. Defaults are omitted so the
    /// canonical state of a fresh page is plain `/browse`.
    pub fn href(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.query.is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(&self.query)));
        }
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        push_facet(&mut pairs, "difficulty", &self.filters.difficulty);
        if let Some(time) = &self.filters.cooking_time {
            pairs.push(format!("time={}", urlencoding::encode(time)));
        }
        push_facet(&mut pairs, "cuisine", &self.filters.cuisine);
        push_facet(&mut pairs, "diet", &self.filters.dietary);

        if pairs.is_empty() {
            "/browse".to_string()
        } else {
            format!("/browse?{}", pairs.join("&"))
        }
    }
}

fn split_facet(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn push_facet(pairs: &mut Vec<String>, key: &str, values: &[String]) {
    if !values.is_empty() {
        pairs.push(format!(
            "{key}={}",
            urlencoding::encode(&values.join(","))
        ));
    }
}
