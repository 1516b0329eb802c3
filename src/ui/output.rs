use crate::models::{Message, MessageKind, Product, Role};
use colored::*;

/// Render one message to the terminal.
pub fn display_message(message: &Message, verbose: bool) {
    if message.pending {
        return;
    }
    match &message.kind {
        MessageKind::Text { content } => match message.role {
            Role::User => println!("{} {}", ">".dimmed(), content),
            Role::Assistant => println!("{}", content.cyan()),
        },
        MessageKind::ProductResults { results, summary } => {
            if let Some(summary) = summary {
                println!("{}", summary.cyan());
            }
            if results.is_empty() {
                println!("{}", "No matching products found.".dimmed());
            }
            for (index, product) in results.iter().enumerate() {
                display_product(index + 1, product, verbose);
            }
        }
    }
}

/// Render a prior conversation before the new turn.
pub fn display_history(messages: &[Message], verbose: bool) {
    for message in messages {
        display_message(message, verbose);
    }
    if !messages.is_empty() {
        println!();
    }
}

fn display_product(rank: usize, product: &Product, verbose: bool) {
    let mut line = format!("{}. {}", rank, product.label().bold());

    if let Some(brand) = &product.brand {
        line.push_str(&format!(" by {}", brand));
    }
    if let Some(category) = &product.category {
        line.push_str(&format!(" ({})", category.dimmed()));
    }
    if let Some(price) = product.price {
        line.push_str(&format!("  {}", format!("${:.2}", price).green()));
    }
    if let Some(rating) = product.rating {
        line.push_str(&format!("  {}", format!("★{:.1}", rating).yellow()));
    }
    println!("{}", line);

    if verbose {
        if let Some(score) = product.score {
            let mut detail = format!("   score: {:.3}", score);
            if let Some(semantic) = product.semantic {
                detail.push_str(&format!("  semantic: {:.3}", semantic));
            }
            eprintln!("{}", detail.dimmed());
        }
    }
}
