//! Drives complete battles round by round at a fixed tick rate.

use arena_core::prelude::*;
use arena_core::view;

use crate::render;
use crate::rewards::Reward;

/// Simulation ticks per second.
pub const TICK_RATE: u32 = 60;

/// Hard cap on a single battle, in ticks (10 simulated minutes). A
/// heal-heavy stalemate can out-sustain all incoming damage; the cap keeps
/// the runner from spinning forever on one.
pub const MAX_TICKS: u32 = 36_000;

/// Configuration for one headless run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed driving encounter draws and every in-battle roll.
    pub seed: u64,
    /// Number of rounds to fight.
    pub rounds: u32,
    /// Player team as template names.
    pub team: Vec<String>,
    /// Enemies drawn per round.
    pub enemies: usize,
    /// Print an ASCII frame and status block after each round.
    pub show_frames: bool,
}

/// Summary of one finished round.
#[derive(Debug, Clone)]
pub struct BattleSummary {
    /// 1-based round number.
    pub round: u32,
    /// Terminal result, or `None` if the tick cap cut a stalemate short.
    pub result: Option<BattleResult>,
    /// Ticks simulated.
    pub ticks: u32,
    /// Player units still standing.
    pub player_survivors: usize,
    /// Enemy units still standing.
    pub enemy_survivors: usize,
    /// Payout for the shell, when the battle resolved.
    pub reward: Option<Reward>,
}

/// Fight `config.rounds` battles and summarize each.
#[must_use]
pub fn run(config: &RunConfig, catalog: &Catalog) -> Vec<BattleSummary> {
    let mut rng = BattleRng::new(config.seed);
    (1..=config.rounds)
        .map(|round| run_round(round, config, catalog, &mut rng))
        .collect()
}

fn run_round(
    round: u32,
    config: &RunConfig,
    catalog: &Catalog,
    rng: &mut BattleRng,
) -> BattleSummary {
    let descriptors: Vec<UnitDescriptor> = config
        .team
        .iter()
        .map(|name| UnitDescriptor::named(name))
        .collect();
    let player = build_team(&descriptors, catalog, Side::Player);
    for err in &player.dropped {
        tracing::warn!(%err, "player roster entry dropped");
    }

    let enemy_descriptors = generate_encounter(catalog, config.enemies, rng);
    let enemy = build_team(&enemy_descriptors, catalog, Side::Enemy);

    let mut battle = Battle::new(player.units, enemy.units, rng.next_u64());
    let dt = Fixed::ONE / Fixed::from_num(TICK_RATE);

    let mut ticks = 0u32;
    while !battle.is_over() && ticks < MAX_TICKS {
        let events = battle.step(dt);
        view::advance_popups(&mut battle, dt);

        for death in &events.deaths {
            let name = battle.unit(death.unit).map_or("?", |u| u.name.as_str());
            tracing::info!(round, unit = name, "unit defeated");
        }
        ticks += 1;
    }

    if config.show_frames {
        let views = view::snapshot(&battle);
        println!("{}", render::render_frame(&views));
        println!("{}", render::render_status(&views));
    }

    let survivors = |side: Side| {
        battle
            .units()
            .iter()
            .filter(|u| u.side == side && u.is_alive())
            .count()
    };

    let result = battle.winner();
    tracing::info!(round, ?result, ticks, "round complete");

    BattleSummary {
        round,
        result,
        ticks,
        player_survivors: survivors(Side::Player),
        enemy_survivors: survivors(Side::Enemy),
        reward: result.map(Reward::for_result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig {
            seed: 42,
            rounds: 2,
            team: vec!["Garen".to_string(), "Ahri".to_string(), "Ezreal".to_string()],
            enemies: 3,
            show_frames: false,
        }
    }

    #[test]
    fn run_produces_one_summary_per_round() {
        let catalog = builtin_catalog();
        let summaries = run(&config(), &catalog);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].round, 1);
        assert_eq!(summaries[1].round, 2);
        for summary in &summaries {
            assert!(summary.ticks > 0);
            match summary.result {
                Some(BattleResult::PlayerWin) => assert_eq!(summary.enemy_survivors, 0),
                Some(BattleResult::EnemyWin) => assert_eq!(summary.player_survivors, 0),
                None => assert_eq!(summary.ticks, MAX_TICKS),
            }
        }
    }

    #[test]
    fn unknown_team_entries_do_not_abort_the_round() {
        let catalog = builtin_catalog();
        let mut cfg = config();
        cfg.rounds = 1;
        cfg.team = vec!["Garen".to_string(), "Teemo".to_string()];
        let summaries = run(&cfg, &catalog);
        // Teemo is silently dropped; Garen fights alone
        assert_eq!(summaries.len(), 1);
    }

    #[test]
    fn runs_are_reproducible_per_seed() {
        let catalog = builtin_catalog();
        let a = run(&config(), &catalog);
        let b = run(&config(), &catalog);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.result, y.result);
            assert_eq!(x.ticks, y.ticks);
            assert_eq!(x.player_survivors, y.player_survivors);
            assert_eq!(x.enemy_survivors, y.enemy_survivors);
        }
    }
}
