use std::sync::Arc;

use crate::browse::view_model::RecipeDetail;
use crate::browse::{BrowseController, BrowseQuery, RecipePage};
use crate::config::Settings;
use crate::gateway::GatewayClient;
use crate::utils::sanitize::truncate;
use crate::Result;

/// Search recipes and print a result table
pub async fn search(settings: &Settings, query: &str, page: usize) -> Result<()> {
    let gateway = Arc::new(GatewayClient::new(&settings.gateway)?);
    let controller = BrowseController::new(gateway, settings.browse.page_size);

    let browse = BrowseQuery::default().with_search(query).with_page(page);
    let result = controller.load_page(&browse).await?;

    print_results(&result);
    Ok(())
}

/// Fetch and print a single recipe
pub async fn recipe(settings: &Settings, id: i64) -> Result<()> {
    let gateway = GatewayClient::new(&settings.gateway)?;
    let detail = RecipeDetail::from_dto(gateway.get_recipe(id).await?);

    println!("\n{}", detail.title);
    println!("From: {}", detail.movie_title);
    println!(
        "{} | {} min | {:.1} stars ({} ratings)",
        detail.difficulty, detail.total_time_minutes, detail.avg_rating, detail.ratings_count
    );

    if !detail.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &detail.ingredients {
            println!("  - {ingredient}");
        }
    }

    if !detail.steps.is_empty() {
        println!("\nSteps:");
        for (i, step) in detail.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    Ok(())
}

fn print_results(page: &RecipePage) {
    if page.recipes.is_empty() {
        println!("No recipes found");
        return;
    }

    println!(
        "\n{:<5} {:<40} {:<24} {:>6} {:<8}",
        "ID", "Title", "Movie", "Time", "Level"
    );
    println!("{}", "-".repeat(86));

    for card in &page.recipes {
        println!(
            "{:<5} {:<40} {:<24} {:>5}m {:<8}",
            card.id,
            truncate(&card.title, 38),
            truncate(&card.movie_title, 22),
            card.total_time_minutes,
            card.difficulty
        );
    }

    println!("\nPage {} of {}", page.page, page.total_pages);
    println!("\nTo view a recipe: reelbites recipe <ID>");
}
