use crate::gateway::models::{RecipeDetailDto, RecipeSummaryDto};

/// Shown when the backend has no image for a dish
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder-dish.svg";

/// Shown when a recipe carries no movie association
pub const UNKNOWN_MOVIE: &str = "Unknown Movie";

/// Map a numeric difficulty rating to its display label.
///
/// Total over all of `i64`: anything at or below 1 is easy, anything at or
/// above 4 is hard, the rest is medium.
pub fn difficulty_label(difficulty: i64) -> &'static str {
    if difficulty <= 1 {
        "Easy"
    } else if difficulty >= 4 {
        "Hard"
    } else {
        "Medium"
    }
}

/// Recipe card as rendered on the browse grid
#[derive(Debug, Clone)]
pub struct RecipeCard {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub movie_title: String,
    pub total_time_minutes: i64,
    pub difficulty: &'static str,
    pub avg_rating: f64,
    pub ratings_count: i64,
}

impl RecipeCard {
    /// Map a wire record into the card shape, substituting defaults for
    /// everything the backend omitted.
    pub fn from_dto(dto: RecipeSummaryDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            image_url: dto
                .main_image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            movie_title: dto
                .movie_title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| UNKNOWN_MOVIE.to_string()),
            total_time_minutes: total_time(dto.prep_time_minutes, dto.cook_time_minutes),
            difficulty: difficulty_label(dto.difficulty),
            avg_rating: dto.avg_rating,
            ratings_count: dto.ratings_count,
        }
    }
}

/// Recipe detail page view model
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub description_html: String,
    pub image_url: String,
    pub movie_title: String,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub total_time_minutes: i64,
    pub difficulty: &'static str,
    pub avg_rating: f64,
    pub ratings_count: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl RecipeDetail {
    pub fn from_dto(dto: RecipeDetailDto) -> Self {
        let prep = dto.prep_time_minutes.unwrap_or(0);
        let cook = dto.cook_time_minutes.unwrap_or(0);

        Self {
            id: dto.id,
            title: dto.title,
            description_html: crate::utils::sanitize::sanitize_html(
                dto.description.as_deref().unwrap_or(""),
            ),
            image_url: dto
                .main_image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            movie_title: dto
                .movie_title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| UNKNOWN_MOVIE.to_string()),
            prep_time_minutes: prep,
            cook_time_minutes: cook,
            total_time_minutes: prep.saturating_add(cook),
            difficulty: difficulty_label(dto.difficulty),
            avg_rating: dto.avg_rating,
            ratings_count: dto.ratings_count,
            ingredients: dto.ingredients,
            steps: dto.steps,
        }
    }
}

fn total_time(prep: Option<i64>, cook: Option<i64>) -> i64 {
    prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))
}
