use crate::rule::GameRule;
use crate::types::ScoreChanges;

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Split of a self-draw settlement: what the dealer pays and what each
/// non-dealer pays. `dealer_pay` is 0 when the winner is the dealer.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsumoPayment {
    pub dealer_pay: i32,
    pub child_pay: i32,
}

/// Self-draw payment split for an agreed settlement amount.
///
/// Both tables enumerate exactly the amounts reachable from the standard
/// scoring bands (30..70 fu at 1-4 han, plus mangan through yakuman).
/// An amount outside the table degrades to a zero payment instead of
/// failing; callers are expected to pass only published amounts.
pub fn tsumo_payments(amount: i32, winner_is_dealer: bool) -> TsumoPayment {
    if winner_is_dealer {
        // Dealer win: all three non-dealers pay the same share.
        let child_pay = match amount {
            1500 => 500,
            2000 => 700,
            2400 => 800,
            2900 => 1000,
            3400 => 1200,
            3900 => 1300,
            4800 => 1600,
            5800 => 2000,
            6800 => 2300,
            7700 => 2600,
            9600 => 3200,
            11600 => 3900,
            12000 => 4000,  // mangan
            18000 => 6000,  // haneman
            24000 => 8000,  // baiman
            36000 => 12000, // sanbaiman
            48000 => 16000, // yakuman
            _ => 0,
        };
        TsumoPayment {
            dealer_pay: 0,
            child_pay,
        }
    } else {
        // Non-dealer win: the dealer pays double the other two.
        let (dealer_pay, child_pay) = match amount {
            1000 => (500, 300),
            1300 => (700, 400),
            1600 => (800, 400),
            2000 => (1000, 500),
            2300 => (1200, 600),
            2600 => (1300, 700),
            3200 => (1600, 800),
            3900 => (2000, 1000),
            4500 => (2300, 1200),
            5200 => (2600, 1300),
            6400 => (3200, 1600),
            7700 => (3900, 2000),
            8000 => (4000, 2000),   // mangan
            12000 => (6000, 3000),  // haneman
            16000 => (8000, 4000),  // baiman
            24000 => (12000, 6000), // sanbaiman
            32000 => (16000, 8000), // yakuman
            _ => (0, 0),
        };
        TsumoPayment {
            dealer_pay,
            child_pay,
        }
    }
}

fn pot_value(riichi_sticks: u32, carry_over: u32, rule: &GameRule) -> i32 {
    (riichi_sticks + carry_over) as i32 * rule.riichi_stick_value
}

/// Score deltas for a self-draw win. The winner collects every opponent's
/// share plus the honba bonus and the whole pot; each opponent additionally
/// pays its honba share.
pub fn tsumo_score_changes(
    winner: u8,
    dealer: u8,
    amount: i32,
    honba: u32,
    riichi_sticks: u32,
    carry_over: u32,
    rule: &GameRule,
) -> ScoreChanges {
    let honba_bonus = honba as i32 * rule.honba_bonus_total;
    let honba_each = honba as i32 * rule.honba_bonus_each;
    let pot = pot_value(riichi_sticks, carry_over, rule);
    let payment = tsumo_payments(amount, winner == dealer);

    let mut changes = ScoreChanges::new();
    if winner == dealer {
        for seat in 0..4u8 {
            if seat == winner {
                changes.insert(seat, payment.child_pay * 3 + honba_bonus + pot);
            } else {
                changes.insert(seat, -(payment.child_pay + honba_each));
            }
        }
    } else {
        for seat in 0..4u8 {
            if seat == winner {
                changes.insert(
                    seat,
                    payment.dealer_pay + payment.child_pay * 2 + honba_bonus + pot,
                );
            } else if seat == dealer {
                changes.insert(seat, -(payment.dealer_pay + honba_each));
            } else {
                changes.insert(seat, -(payment.child_pay + honba_each));
            }
        }
    }
    changes
}

/// Score deltas for a discard win: only the discarder pays. The pot goes to
/// the winner on top; the discarder does not cover it.
pub fn ron_score_changes(
    winner: u8,
    loser: u8,
    amount: i32,
    honba: u32,
    riichi_sticks: u32,
    carry_over: u32,
    rule: &GameRule,
) -> ScoreChanges {
    let honba_bonus = honba as i32 * rule.honba_bonus_total;
    let pot = pot_value(riichi_sticks, carry_over, rule);

    let mut changes = ScoreChanges::new();
    for seat in 0..4u8 {
        if seat == winner {
            changes.insert(seat, amount + honba_bonus + pot);
        } else if seat == loser {
            changes.insert(seat, -(amount + honba_bonus));
        } else {
            changes.insert(seat, 0);
        }
    }
    changes
}

/// Score deltas for an exhaustive draw. The 3000-point pool is split with
/// independent floors on each side, so uneven splits are not forced to sum
/// to zero. 0 or 4 tenpai players means no transfer at all.
pub fn draw_score_changes(tenpai_seats: &[u8], rule: &GameRule) -> ScoreChanges {
    let tenpai_count = tenpai_seats.len() as i32;
    let noten_count = 4 - tenpai_count;

    let mut changes = ScoreChanges::new();
    if tenpai_count > 0 && tenpai_count < 4 {
        let tenpai_bonus = rule.draw_bonus_total / tenpai_count;
        let noten_penalty = rule.draw_bonus_total / noten_count;
        for seat in 0..4u8 {
            if tenpai_seats.contains(&seat) {
                changes.insert(seat, tenpai_bonus);
            } else {
                changes.insert(seat, -noten_penalty);
            }
        }
    } else {
        for seat in 0..4u8 {
            changes.insert(seat, 0);
        }
    }
    changes
}

/// Display name for a 1-based round index: 1-4 are East, 5-8 South, and so
/// on for overtime rounds.
pub fn round_name(round: u8) -> String {
    match round {
        1..=4 => format!("東{}局", round),
        5..=8 => format!("南{}局", round - 4),
        9..=12 => format!("西{}局", round - 8),
        _ => format!("北{}局", round.saturating_sub(12)),
    }
}
