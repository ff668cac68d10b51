//! Outlast Headless Simulation Harness
//!
//! Drives the game core through scripted survival sessions.
//! Runs entirely in-process: no renderer, no input devices, no audio.
//!
//! Usage:
//!   cargo run -p outlast-simtest
//!   cargo run -p outlast-simtest -- --verbose
//!   cargo run -p outlast-simtest -- --seed 1234

use outlast_core::config::NeedsRates;
use outlast_core::prelude::*;
use outlast_core::systems::{tick_vitals, try_craft, LOOT_PAYOUT_CHANCE};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

// ── Balance document (same JSON a game build ships with) ───────────────
const BALANCE_JSON: &str = include_str!("../../../data/balance.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    println!("=== Outlast Simulation Harness (seed {seed}) ===\n");

    let config = match BalanceConfig::from_json(BALANCE_JSON) {
        Ok(c) => c,
        Err(e) => {
            log::error!("balance document rejected: {e}");
            println!("  ✗ balance_parse: {e}");
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. Balance document
    results.extend(validate_balance(&config));

    // 2. Inventory and crafting
    results.extend(validate_crafting(&config, seed));

    // 3. Needs sweep
    results.extend(validate_needs(&config.needs));

    // 4. World generation
    results.extend(validate_world_generation(&config, seed));

    // 5. Interactions over a generated world
    results.extend(validate_interactions(&config, seed));

    // 6. Cooking deadlines
    results.extend(validate_cooking(&config, seed));

    // 7. Scripted survival session
    results.extend(validate_session(&config, seed, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        if !r.passed {
            log::warn!("check {} failed: {}", r.name, r.detail);
        }
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    log::info!("{passed}/{total} checks passed (seed {seed})");
    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Balance ──────────────────────────────────────────────────────────

fn validate_balance(config: &BalanceConfig) -> Vec<TestResult> {
    println!("--- Balance Document ---");
    let mut results = Vec::new();
    let defaults = BalanceConfig::default();

    results.push(TestResult::new(
        "balance_needs_match_reference",
        config.needs == defaults.needs,
        format!(
            "hunger {}/min, thirst {}/min, damage {}/min",
            config.needs.hunger_per_min, config.needs.thirst_per_min, config.needs.damage_per_min
        ),
    ));

    let food_kinds = ItemKind::all()
        .iter()
        .filter(|k| k.category() == outlast_core::items::ItemCategory::Food)
        .count();
    results.push(TestResult::new(
        "balance_every_food_has_effect",
        config.consumption.effects.len() == food_kinds,
        format!("{} effects for {} food kinds", config.consumption.effects.len(), food_kinds),
    ));

    results.push(TestResult::new(
        "balance_cook_durations_positive",
        config.cooking.cook_seconds > 0.0 && config.cooking.boil_seconds > 0.0,
        format!(
            "cook {}s, boil {}s",
            config.cooking.cook_seconds, config.cooking.boil_seconds
        ),
    ));

    results
}

// ── 2. Crafting ─────────────────────────────────────────────────────────

fn validate_crafting(config: &BalanceConfig, seed: u64) -> Vec<TestResult> {
    println!("--- Inventory & Crafting ---");
    let mut results = Vec::new();
    let catalog = Catalog::standard();

    let mut inv = Inventory::new();
    let stocked = inv
        .add(&catalog, ItemKind::Wood, 3)
        .and_then(|_| inv.add(&catalog, ItemKind::Stone, 2));
    let crafted = stocked.and_then(|_| try_craft(&catalog, &mut inv, ItemKind::Axe));
    results.push(TestResult::new(
        "craft_axe_exact",
        crafted.is_ok()
            && inv.count(ItemKind::Axe) == 1
            && inv.count(ItemKind::Wood) == 0
            && inv.count(ItemKind::Stone) == 0
            && inv.quick_bar()[0] == Some(ItemKind::Axe),
        format!("{:?}", inv.iter().collect::<Vec<_>>()),
    ));

    // Every recipe either crafts exactly or leaves the inventory untouched.
    let game = match GameState::new(config.clone(), seed) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult::new("craft_game_init", false, e.to_string()));
            return results;
        }
    };
    let mut atomic_failures = Vec::new();
    for (kind, recipe) in game.catalog.recipes() {
        let mut inv = game.player.inventory.clone();
        let before = inv.clone();
        match try_craft(&game.catalog, &mut inv, kind) {
            Ok(()) => {
                let exact = recipe
                    .iter()
                    .all(|(item, n)| inv.count(*item) + n == before.count(*item))
                    && inv.count(kind) == before.count(kind) + 1;
                if !exact {
                    atomic_failures.push(format!("{kind}: wrong amounts"));
                }
            }
            Err(_) if inv == before => {}
            Err(e) => atomic_failures.push(format!("{kind}: partial mutation after {e}")),
        }
    }
    results.push(TestResult::new(
        "craft_all_or_nothing",
        atomic_failures.is_empty(),
        if atomic_failures.is_empty() {
            format!("{} recipes checked", game.catalog.recipes().count())
        } else {
            atomic_failures.join("; ")
        },
    ));

    let mut inv = Inventory::new();
    let _ = inv.add(&catalog, ItemKind::RawMeat, 1);
    let _ = inv.select_slot(0);
    let removed = inv.remove(ItemKind::RawMeat, 1).is_ok();
    results.push(TestResult::new(
        "quick_slot_cleared_on_last_unit",
        removed && inv.equipped().is_none() && inv.slot_of(ItemKind::RawMeat).is_none(),
        format!("equipped {:?}", inv.equipped()),
    ));

    results
}

// ── 3. Needs ────────────────────────────────────────────────────────────

fn validate_needs(rates: &NeedsRates) -> Vec<TestResult> {
    println!("--- Needs ---");
    let mut results = Vec::new();

    let mut vitals = Vitals::default();
    let mut out_of_range = 0;
    let mut deaths = 0;
    let steps = [0.0, 0.016, 0.5, 1.0, 10.0, 60.0, 300.0];
    for i in 0..5000 {
        let dt = steps[i % steps.len()];
        if tick_vitals(&mut vitals, rates, dt, i % 3 == 0).died {
            deaths += 1;
        }
        if !vitals.in_range() {
            out_of_range += 1;
        }
    }
    results.push(TestResult::new(
        "needs_clamped",
        out_of_range == 0,
        format!("{out_of_range} out-of-range states, {deaths} deaths"),
    ));
    results.push(TestResult::new(
        "needs_starvation_kills",
        deaths > 0,
        format!("{deaths} deaths over sweep"),
    ));

    let mut starving = Vitals {
        health: 50.0,
        hunger: 0.0,
        thirst: 0.0,
        stamina: 100.0,
    };
    tick_vitals(&mut starving, rates, 60.0, false);
    let lost = 50.0 - starving.health;
    results.push(TestResult::new(
        "needs_damage_rate",
        (lost - rates.damage_per_min).abs() < 1e-3,
        format!("lost {lost:.3} health in 60s"),
    ));

    results
}

// ── 4. World generation ─────────────────────────────────────────────────

fn validate_world_generation(config: &BalanceConfig, seed: u64) -> Vec<TestResult> {
    println!("--- World Generation ---");
    let mut results = Vec::new();

    let mut game = match GameState::new(config.clone(), seed) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult::new("worldgen_init", false, e.to_string()));
            return results;
        }
    };
    let world_config = WorldConfig::default();
    game.generate(&world_config, &FlatTerrain::default());

    let count = game.object_count();
    results.push(TestResult::new(
        "worldgen_populated",
        count > 30,
        format!("{count} objects"),
    ));

    let mut breakdown = Vec::new();
    for kind in ObjectKind::all() {
        let n = game.count_of(*kind);
        if n > 0 {
            breakdown.push(format!("{kind}={n}"));
        }
    }
    results.push(TestResult::new(
        "worldgen_has_trees",
        game.count_of(ObjectKind::Tree) > 0,
        breakdown.join(" "),
    ));

    let containers_ok = game
        .world
        .query::<&Building>()
        .iter()
        .all(|(_, b)| (1..=3).contains(&b.containers.len()));
    results.push(TestResult::new(
        "worldgen_buildings_have_containers",
        containers_ok,
        format!("{} buildings", game.count_of(ObjectKind::Building)),
    ));

    let clear = !outlast_core::systems::is_blocked(
        &game.world,
        Vec3::ZERO,
        game.config.interaction.player_radius,
    );
    results.push(TestResult::new(
        "worldgen_spawn_point_clear",
        clear,
        "origin not blocked",
    ));

    results
}

// ── 5. Interactions ─────────────────────────────────────────────────────

fn validate_interactions(config: &BalanceConfig, seed: u64) -> Vec<TestResult> {
    println!("--- Interactions ---");
    let mut results = Vec::new();

    let mut game = match GameState::new(config.clone(), seed) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult::new("interact_init", false, e.to_string()));
            return results;
        }
    };
    game.generate(&WorldConfig::default(), &FlatTerrain::default());

    // Fell every tree, counting hits.
    let trees: Vec<(hecs::Entity, Vec3)> = game
        .world
        .query::<(&Position, &WorldObject)>()
        .iter()
        .filter(|(_, (_, o))| o.kind == ObjectKind::Tree)
        .map(|(e, (p, _))| (e, p.0))
        .collect();
    let wood_before = game.player.inventory.count(ItemKind::Wood);
    let mut bad_hit_counts = 0;
    let mut wrong_tool_ignored = true;
    for (tree, pos) in &trees {
        game.player.position = *pos + Vec3::new(2.5, 0.0, 0.0);

        if let Some(slot) = game.player.inventory.slot_of(ItemKind::Knife) {
            let _ = game.select_slot(slot);
        }
        if game.interact(*tree).ok()
            != Some(InteractionOutcome::NoEffect(NoEffectReason::WrongTool))
        {
            wrong_tool_ignored = false;
        }

        if let Some(slot) = game.player.inventory.slot_of(ItemKind::Axe) {
            let _ = game.select_slot(slot);
        }
        let mut hits = 0;
        while game.world.contains(*tree) && hits < 20 {
            let _ = game.interact(*tree);
            hits += 1;
        }
        if hits != 5 {
            bad_hit_counts += 1;
        }
    }
    let gained = game.player.inventory.count(ItemKind::Wood) - wood_before;
    results.push(TestResult::new(
        "interact_trees_deplete_after_five_hits",
        bad_hit_counts == 0,
        format!("{} trees felled, +{} wood", trees.len(), gained),
    ));
    results.push(TestResult::new(
        "interact_tree_yield_in_range",
        gained as usize >= trees.len() * 2 && gained as usize <= trees.len() * 5,
        format!("{gained} wood from {} trees", trees.len()),
    ));
    results.push(TestResult::new(
        "interact_wrong_tool_ignored",
        wrong_tool_ignored,
        "knife on trees has no effect",
    ));

    // Search every container twice.
    let searchable: Vec<hecs::Entity> = game
        .world
        .query::<&Loot>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    let mut second_search_paid = 0;
    let mut lines_total = 0;
    let mut lines_paid = 0;
    for entity in &searchable {
        lines_total += game
            .world
            .get::<&Loot>(*entity)
            .map(|l| l.lines.len())
            .unwrap_or(0);
        if let Ok(InteractionOutcome::Searched { loot }) = game.interact(*entity) {
            lines_paid += loot.len();
        }
        if game.interact(*entity).ok()
            != Some(InteractionOutcome::NoEffect(NoEffectReason::AlreadySearched))
        {
            second_search_paid += 1;
        }
    }
    results.push(TestResult::new(
        "interact_containers_search_once",
        second_search_paid == 0,
        format!("{} containers", searchable.len()),
    ));
    let rate = if lines_total > 0 {
        lines_paid as f64 / lines_total as f64
    } else {
        LOOT_PAYOUT_CHANCE
    };
    results.push(TestResult::new(
        "interact_loot_payout_rate",
        rate <= LOOT_PAYOUT_CHANCE + 0.2,
        format!("{lines_paid}/{lines_total} lines paid (zero-quantity draws excluded)"),
    ));

    // Hunt every animal with the knife.
    if let Some(slot) = game.player.inventory.slot_of(ItemKind::Knife) {
        let _ = game.select_slot(slot);
    }
    let animals: Vec<hecs::Entity> = game
        .world
        .query::<&Wander>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    let meat_before = game.player.inventory.count(ItemKind::RawMeat);
    let mut stubborn = 0;
    for animal in &animals {
        let mut hits = 0;
        while game.world.contains(*animal) && hits < 10 {
            let _ = game.interact(*animal);
            hits += 1;
        }
        // 50 health, 15 per knife hit.
        if hits != 4 {
            stubborn += 1;
        }
    }
    let meat = game.player.inventory.count(ItemKind::RawMeat) - meat_before;
    results.push(TestResult::new(
        "interact_animals_killed_by_knife",
        stubborn == 0 && meat as usize >= animals.len() * 2,
        format!("{} animals, +{meat} raw meat", animals.len()),
    ));

    results
}

// ── 6. Cooking ──────────────────────────────────────────────────────────

fn validate_cooking(config: &BalanceConfig, seed: u64) -> Vec<TestResult> {
    println!("--- Cooking ---");
    let mut results = Vec::new();

    let mut game = match GameState::new(
        BalanceConfig {
            starting_kit: StartingKit::Plenty,
            ..config.clone()
        },
        seed,
    ) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult::new("cooking_init", false, e.to_string()));
            return results;
        }
    };
    let fire = game.spawn(ObjectKind::Campfire, Vec3::new(2.0, 0.0, 0.0));
    let _ = game.update(0.0);

    if let Some(slot) = game.player.inventory.slot_of(ItemKind::RawMeat) {
        let _ = game.select_slot(slot);
    }
    let mut queued = 0;
    for _ in 0..3 {
        if matches!(game.interact(fire), Ok(InteractionOutcome::Cooking { .. })) {
            queued += 1;
        }
    }
    results.push(TestResult::new(
        "cooking_jobs_stack",
        queued == 3 && game.cooking.pending_at(fire).count() == 3,
        format!("{} pending", game.cooking.pending().len()),
    ));

    let mut early = 0;
    let mut cooked = 0;
    let step = 0.25;
    while game.clock() < config.cooking.cook_seconds + 5.0 {
        let report = match game.update(step) {
            Ok(r) => r,
            Err(_) => break,
        };
        if !report.cooked.is_empty() && game.clock() < config.cooking.cook_seconds {
            early += 1;
        }
        cooked += report.cooked.len();
    }
    results.push(TestResult::new(
        "cooking_resolves_on_deadline",
        early == 0 && cooked == 3 && game.cooking.is_idle(),
        format!(
            "{cooked} cooked, {} cooked meat held",
            game.player.inventory.count(ItemKind::CookedMeat)
        ),
    ));

    results
}

// ── 7. Scripted session ─────────────────────────────────────────────────

fn validate_session(config: &BalanceConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Survival Session ---");
    let mut results = Vec::new();

    let mut game = match GameState::new(config.clone(), seed) {
        Ok(g) => g,
        Err(e) => {
            results.push(TestResult::new("session_init", false, e.to_string()));
            return results;
        }
    };
    game.generate(&WorldConfig::default(), &FlatTerrain::default());

    // Wander for ten minutes at 30 FPS, chopping and searching whatever is
    // in reach, eating when hungry.
    let dt = 1.0 / 30.0;
    let mut heading = Vec3::new(1.0, 0.0, 0.3).normalize();
    let mut blocked_moves = 0;
    let mut interactions = 0;
    let mut deaths = 0;
    let mut vitals_ok = true;
    for frame in 0..(30 * 600) {
        game.set_sprinting(frame % 300 < 60);
        let report = match game.update(dt) {
            Ok(r) => r,
            Err(e) => {
                results.push(TestResult::new("session_update", false, e.to_string()));
                return results;
            }
        };
        if report.died {
            deaths += 1;
            game.player.position = Vec3::ZERO;
        }
        vitals_ok &= game.player.vitals.in_range();

        if !game.move_player(heading * (2.0 * dt)) {
            blocked_moves += 1;
            heading = Vec3::new(-heading.z, 0.0, heading.x);
        }
        if game.player.position.length() > 35.0 {
            heading = -game.player.position.normalize();
        }

        if frame % 15 == 0 {
            if let Ok(Some(outcome)) = game.interact_nearest() {
                if outcome.had_effect() {
                    interactions += 1;
                }
            }
        }
        if game.player.vitals.hunger < 40.0 {
            let _ = game.consume(ItemKind::CookedMeat);
        }
    }

    results.push(TestResult::new(
        "session_vitals_in_range",
        vitals_ok,
        format!(
            "health {:.1}, hunger {:.1}, thirst {:.1}, stamina {:.1}",
            game.player.vitals.health,
            game.player.vitals.hunger,
            game.player.vitals.thirst,
            game.player.vitals.stamina
        ),
    ));
    results.push(TestResult::new(
        "session_survived",
        deaths == 0,
        format!("{deaths} deaths in 10 minutes"),
    ));
    results.push(TestResult::new(
        "session_clock",
        (game.clock() - 600.0).abs() < 0.1,
        format!(
            "{:.2}s simulated, {interactions} interactions, {blocked_moves} blocked moves",
            game.clock()
        ),
    ));

    if verbose {
        match serde_json::to_string_pretty(&game.player) {
            Ok(json) => println!("final player state:\n{json}"),
            Err(e) => println!("could not serialize player: {e}"),
        }
    }

    results
}
