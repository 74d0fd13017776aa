use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::warn;

use crate::{
    browse::{
        filters::FACET_CATALOG,
        pagination::Pager,
        view_model::{RecipeCard, RecipeDetail},
        BrowseController, BrowseParams, BrowseQuery,
    },
    config::Settings,
    gateway::GatewayClient,
    session::{Session, SessionStore},
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayClient>,
    pub settings: Settings,
}

/// One filter chip in the browse sidebar
struct FilterChip {
    label: &'static str,
    href: String,
    active: bool,
}

struct FilterGroupData {
    label: &'static str,
    chips: Vec<FilterChip>,
}

/// Browse page template
#[derive(Template)]
#[template(path = "browse.html")]
struct BrowseTemplate {
    query: String,
    recipes: Vec<RecipeCard>,
    pager: Option<Pager>,
    filter_groups: Vec<FilterGroupData>,
    clear_filters_href: Option<String>,
    degraded: bool,
    signed_in: bool,
}

/// GET / - Redirect to /browse
pub async fn index() -> impl IntoResponse {
    Redirect::permanent("/browse")
}

/// GET /browse - Browse and search recipes
///
/// The browse list never fails the request: a gateway error is logged and
/// the page renders in its degraded (empty) form instead.
pub async fn browse_page(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(params): Query<BrowseParams>,
) -> Result<impl IntoResponse> {
    let query = BrowseQuery::from_params(params);

    let controller =
        BrowseController::new(state.gateway.clone(), state.settings.browse.page_size);

    let (recipes, total_pages, degraded) = match controller.load_page(&query).await {
        Ok(page) => {
            let total_pages = page.total_pages.min(state.settings.browse.max_pages);
            (page.recipes, total_pages, false)
        }
        Err(e) => {
            warn!("Browse fetch failed: {}", e.log_safe());
            let retained = controller.snapshot();
            (retained.recipes, retained.total_pages, true)
        }
    };

    let filter_groups = filter_groups(&query);
    let clear_filters_href = if query.filters.is_empty() {
        None
    } else {
        Some(query.without_filters().href())
    };

    let template = BrowseTemplate {
        query: query.query.clone(),
        recipes,
        pager: Pager::build(&query, total_pages),
        filter_groups,
        clear_filters_href,
        degraded,
        signed_in: SessionStore::read(&cookies).is_some(),
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

fn filter_groups(query: &BrowseQuery) -> Vec<FilterGroupData> {
    FACET_CATALOG
        .iter()
        .map(|group| FilterGroupData {
            label: group.label,
            chips: group
                .values
                .iter()
                .map(|&(value, label)| FilterChip {
                    label,
                    href: query.with_filter_toggled(group.facet, value).href(),
                    active: query.filters.is_selected(group.facet, value),
                })
                .collect(),
        })
        .collect()
}

/// A comment as rendered on the detail page
struct CommentData {
    author: String,
    content: String,
    posted_at: String,
}

/// Recipe detail page template
#[derive(Template)]
#[template(path = "recipe.html")]
struct RecipeTemplate {
    recipe: RecipeDetail,
    comments: Vec<CommentData>,
    signed_in: bool,
}

/// GET /recipes/:id - Recipe detail page
pub async fn recipe_detail(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    // Fetch the recipe and its comments concurrently; a comment failure
    // degrades to an empty list rather than taking the page down
    let (recipe, comments) =
        futures::join!(state.gateway.get_recipe(id), state.gateway.list_comments(id));

    let recipe = RecipeDetail::from_dto(recipe?);

    let comments = comments.unwrap_or_else(|e| {
        warn!("Comment fetch failed for recipe {}: {}", id, e.log_safe());
        Vec::new()
    });

    let comments = comments
        .into_iter()
        .map(|c| CommentData {
            author: c.author_name.unwrap_or_else(|| "Anonymous".to_string()),
            content: c.content,
            posted_at: c
                .created_at
                .map(|dt| dt.format("%b %e, %Y").to_string())
                .unwrap_or_default(),
        })
        .collect();

    let template = RecipeTemplate {
        recipe,
        comments,
        signed_in: SessionStore::read(&cookies).is_some(),
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

#[derive(Deserialize)]
pub struct CommentForm {
    pub content: String,
}

/// POST /recipes/:id/comments - Add a comment
pub async fn post_comment(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect> {
    let Some(session) = SessionStore::read(&cookies) else {
        return Ok(Redirect::to("/login"));
    };

    let content = form.content.trim();
    if content.is_empty() {
        return Ok(Redirect::to(&format!("/recipes/{id}")));
    }

    match state.gateway.post_comment(id, content, &session).await {
        Ok(_) => Ok(Redirect::to(&format!("/recipes/{id}"))),
        // An expired token reads as signed-out, not as a server fault
        Err(Error::Unauthorized(_)) => {
            SessionStore::clear(&cookies);
            Ok(Redirect::to("/login"))
        }
        Err(e) => Err(e),
    }
}

/// Login page template
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// GET /login - Login page
pub async fn login_page() -> Result<impl IntoResponse> {
    let template = LoginTemplate { error: None };
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// POST /login - Exchange credentials for a gateway session token
pub async fn login_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.gateway.login(&form.email, &form.password).await {
        Ok(token) => {
            SessionStore::write(&cookies, &Session::new(token.token));
            Ok(Redirect::to("/browse").into_response())
        }
        Err(Error::Unauthorized(_)) => {
            let template = LoginTemplate {
                error: Some("Invalid email or password".to_string()),
            };
            Ok(Html(template.render().map_err(|e| {
                Error::Internal(format!("Template render failed: {e}"))
            })?)
            .into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /logout - Clear the session cookie
pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    SessionStore::clear(&cookies);
    Redirect::to("/browse")
}

/// Health check response
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
