//! Catalog browsing: pattern listing, pattern detail, and criteria.
//!
//! Used by the `compass patterns`, `compass show`, and `compass criteria`
//! commands. The HTTP server calls the core API directly.

use anyhow::Result;

use arch_compass_core::criteria::list_criteria;
use arch_compass_core::models::{ArchitecturePattern, PatternFilter};

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// List validated patterns matching `filter`.
pub async fn list_patterns(config: &Config, filter: &PatternFilter) -> Result<Vec<ArchitecturePattern>> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let patterns = arch_compass_core::list_patterns(&store, filter).await;
    pool.close().await;
    Ok(patterns?)
}

/// Retrieve one validated pattern by id.
pub async fn get_pattern(config: &Config, id: &str) -> Result<ArchitecturePattern> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let pattern = arch_compass_core::get_pattern(&store, id).await;
    pool.close().await;
    Ok(pattern?)
}

/// CLI entry point for `compass patterns`.
pub async fn run_list(config: &Config, filter: &PatternFilter, json: bool) -> Result<()> {
    let patterns = list_patterns(config, filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    if patterns.is_empty() {
        println!("No patterns.");
        return Ok(());
    }

    println!(
        "{:<16} {:<14} {:<11} {:<11} {:<6} NAME",
        "ID", "CATEGORY", "COMPLEXITY", "SCALABILITY", "COST"
    );
    for p in &patterns {
        let ch = &p.characteristics;
        println!(
            "{:<16} {:<14} {:<11} {:<11} {:<6} {}",
            p.id, p.category, ch.complexity, ch.scalability, ch.cost, p.name
        );
    }

    Ok(())
}

/// CLI entry point for `compass show <id>`.
pub async fn run_show(config: &Config, id: &str, json: bool) -> Result<()> {
    let p = get_pattern(config, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&p)?);
        return Ok(());
    }

    let ch = &p.characteristics;
    println!("--- Pattern ---");
    println!("id:               {}", p.id);
    println!("name:             {}", p.name);
    println!("category:         {}", p.category);
    println!("description:      {}", p.description);
    println!();
    println!("--- Characteristics ---");
    println!("complexity:       {}", ch.complexity);
    println!("scalability:      {}", ch.scalability);
    println!("maintainability:  {}", ch.maintainability);
    println!("performance:      {}", ch.performance);
    println!("cost:             {}", ch.cost);
    println!("team size:        {}", ch.team_size);
    println!("time to market:   {}", ch.time_to_market);
    println!("security:         {}", ch.security);

    for (title, items) in [
        ("Pros", &p.pros),
        ("Cons", &p.cons),
        ("Use cases", &p.use_cases),
        ("Technology stack", &p.technology_stack),
    ] {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("--- {} ---", title);
        for item in items {
            println!("  - {}", item);
        }
    }

    Ok(())
}

/// CLI entry point for `compass criteria`.
pub fn run_criteria(json: bool) -> Result<()> {
    let criteria = list_criteria();

    if json {
        println!("{}", serde_json::to_string_pretty(criteria)?);
        return Ok(());
    }

    println!("{:<16} {:<7} {:<12} DESCRIPTION", "CRITERION", "WEIGHT", "CATEGORY");
    for c in criteria {
        println!(
            "{:<16} {:<7.2} {:<12} {}",
            c.id, c.weight, c.category, c.description
        );
    }

    Ok(())
}
