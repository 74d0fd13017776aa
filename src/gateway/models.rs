use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of recipe summaries as the gateway returns it.
///
/// Both fields are defaulted so an empty body decodes to an empty page
/// instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePageDto {
    #[serde(default)]
    pub content: Vec<RecipeSummaryDto>,
    #[serde(default)]
    pub total_pages: usize,
}

/// Wire shape of a recipe summary.
///
/// Everything the backend may omit is optional here; default substitution
/// happens in the view-model mapping, never at the decode boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub main_image_url: Option<String>,
    pub movie_title: Option<String>,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
    #[serde(default)]
    pub difficulty: i64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub ratings_count: i64,
}

/// Full recipe as served by GET /recipes/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub main_image_url: Option<String>,
    pub movie_title: Option<String>,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
    #[serde(default)]
    pub difficulty: i64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub ratings_count: i64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A comment on a recipe
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub author_name: Option<String>,
    #[serde(default)]
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for POST /recipes/{id}/comments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub content: String,
}

/// Body for POST /auth/login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token issued by the gateway on login. Opaque to this application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_decodes_without_optional_fields() {
        // Only id present; every other field absent or null
        let json = r#"{"id": 7, "mainImageUrl": null}"#;
        let dto: RecipeSummaryDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.title, "");
        assert!(dto.main_image_url.is_none());
        assert!(dto.movie_title.is_none());
        assert!(dto.prep_time_minutes.is_none());
        assert_eq!(dto.difficulty, 0);
        assert_eq!(dto.ratings_count, 0);
    }

    #[test]
    fn test_page_decodes_empty_body() {
        let dto: RecipePageDto = serde_json::from_str("{}").unwrap();
        assert!(dto.content.is_empty());
        assert_eq!(dto.total_pages, 0);
    }
}
