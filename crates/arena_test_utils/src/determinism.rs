//! Determinism test harness.
//!
//! Two identically-prepared battles stepped with the same `dt` sequence
//! must produce identical HP trajectories and the same winner.

use arena_core::battle::Battle;
use arena_core::math::Fixed;

/// Step a battle through a `dt` sequence, recording every unit's HP after
/// each step.
pub fn hp_trajectory(battle: &mut Battle, dts: &[Fixed]) -> Vec<Vec<u32>> {
    dts.iter()
        .map(|&dt| {
            battle.step(dt);
            battle.units().iter().map(|unit| unit.hp).collect()
        })
        .collect()
}

/// Build two battles with the same closure and assert they replay
/// identically over the given `dt` sequence.
///
/// # Panics
///
/// Panics if the trajectories or winners diverge.
pub fn assert_identical_outcomes<F>(make_battle: F, dts: &[Fixed])
where
    F: Fn() -> Battle,
{
    let mut first = make_battle();
    let mut second = make_battle();

    let trajectory_a = hp_trajectory(&mut first, dts);
    let trajectory_b = hp_trajectory(&mut second, dts);

    assert_eq!(trajectory_a, trajectory_b, "HP trajectories diverged");
    assert_eq!(first.winner(), second.winner(), "winners diverged");
}
