//! Round rewards handed to the host shell after a battle.
//!
//! The economy itself lives outside the combat core; this is only the
//! payout table the shell applies to the terminal [`BattleResult`].

use arena_core::battle::BattleResult;

/// Gold paid out every round regardless of outcome.
pub const BASE_GOLD: u32 = 5;

/// Bonus gold for winning the round.
pub const WIN_BONUS_GOLD: u32 = 3;

/// Damage to the player's pooled health on a loss.
pub const LOSS_PLAYER_DAMAGE: u32 = 10;

/// What the surrounding game state applies after a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    /// Gold granted.
    pub gold: u32,
    /// Damage to the player's pooled health.
    pub player_damage: u32,
}

impl Reward {
    /// Payout for a terminal battle result.
    #[must_use]
    pub const fn for_result(result: BattleResult) -> Self {
        match result {
            BattleResult::PlayerWin => Self {
                gold: BASE_GOLD + WIN_BONUS_GOLD,
                player_damage: 0,
            },
            BattleResult::EnemyWin => Self {
                gold: BASE_GOLD,
                player_damage: LOSS_PLAYER_DAMAGE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winning_pays_more_than_losing() {
        let win = Reward::for_result(BattleResult::PlayerWin);
        let loss = Reward::for_result(BattleResult::EnemyWin);
        assert_eq!(win.gold, 8);
        assert_eq!(win.player_damage, 0);
        assert_eq!(loss.gold, 5);
        assert_eq!(loss.player_damage, 10);
        assert!(win.gold > loss.gold);
    }
}
