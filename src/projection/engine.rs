//! Compound interest recurrence over a deposit schedule

/// Project the balance of a deposit schedule at a fixed effective rate.
///
/// `schedule[0]` is the starting capital; every entry represents one period that
/// generates interest. Returns `schedule.len() + 1` balances where index 0 is the
/// initial balance, or an empty trajectory for an empty schedule.
///
/// Deposits are credited at the end of the prior period and earn the full rate of
/// the period together with the rolled-over balance.
pub fn compound(schedule: &[f64], rate: f64) -> Vec<f64> {
    let Some(&initial) = schedule.first() else {
        return Vec::new();
    };

    let growth = 1.0 + rate;
    let mut trajectory = Vec::with_capacity(schedule.len() + 1);
    trajectory.push(initial);
    trajectory.push(initial * growth);

    for &deposit in &schedule[1..] {
        let prior = trajectory[trajectory.len() - 1];
        trajectory.push((prior + deposit) * growth);
    }

    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_schedule() {
        assert!(compound(&[], 0.05).is_empty());
    }

    #[test]
    fn test_trajectory_length() {
        for len in 1..20 {
            let schedule = vec![100.0; len];
            assert_eq!(compound(&schedule, 0.01).len(), len + 1);
        }
    }

    #[test]
    fn test_initial_balance_first() {
        let trajectory = compound(&[2500.0, 10.0], 0.1);
        assert_eq!(trajectory[0], 2500.0);
        assert_relative_eq!(trajectory[1], 2750.0);
        assert_relative_eq!(trajectory[2], 3036.0);
    }

    #[test]
    fn test_level_deposits() {
        let r: f64 = 0.0456;
        let trajectory = compound(&[1e3, 1e3, 1e3], r);
        let expected = ((1e3 * (1.0 + r) + 1e3) * (1.0 + r) + 1e3) * (1.0 + r);
        assert_relative_eq!(*trajectory.last().unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_single_deposit_grows_geometrically() {
        let trajectory = compound(&[2350.0, 0.0, 0.0], 0.0275);
        assert_relative_eq!(
            *trajectory.last().unwrap(),
            2350.0 * 1.0275_f64.powi(3),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_deferred_deposit() {
        let trajectory = compound(&[0.0, 1e4, 0.0], 0.0389);
        assert_relative_eq!(
            *trajectory.last().unwrap(),
            1e4 * 1.0389_f64.powi(2),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_accumulates_deposits() {
        let trajectory = compound(&[100.0, 50.0, 25.0], 0.0);
        assert_eq!(trajectory, vec![100.0, 100.0, 150.0, 175.0]);
    }
}
