use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta units for this tick
    pub now: f64, // Timestamp of this tick in ms
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 1.0, now: 0.0 }
    }
}

/// Snapshot of both paddles' scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub computer: u32,
    pub player: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Computer => self.computer,
            Side::Player => self.player,
        }
    }

    pub fn total(&self) -> u32 {
        self.computer + self.player
    }
}

/// A point was won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub winner: Side,
    pub score: u32, // winner's new score
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<ScoreEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_lookup_and_total() {
        let score = Score {
            computer: 3,
            player: 2,
        };
        assert_eq!(score.get(Side::Computer), 3);
        assert_eq!(score.get(Side::Player), 2);
        assert_eq!(score.total(), 5);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = Some(Side::Player);
        events.scored = Some(ScoreEvent {
            winner: Side::Computer,
            score: 1,
        });

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(events.ball_hit_paddle.is_none());
        assert!(events.scored.is_none());
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..8 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
