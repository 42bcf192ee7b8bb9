use crate::systems::{apply_pointer, rescale};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameError, GameRng, Paddle,
    PlayField, Score, ScoreEvent, Side, Time,
};
use hecs::World;

/// One active game: the world plus everything `step` needs.
///
/// Created fresh on every start and replaced wholesale by the next one.
pub struct GameState {
    pub world: World,
    pub field: PlayField,
    pub config: Config,
    pub time: Time,
    pub events: Events,
    pub rng: GameRng,
    pub paused: bool,
    pub sound_enabled: bool,
}

impl GameState {
    /// Both paddles centered, ball served from the middle
    pub fn new(field: PlayField, config: Config, seed: u64, now_ms: f64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let center_y = field.center().y;

        create_paddle(&mut world, Paddle::computer(center_y, config.cpu_speed));
        create_paddle(&mut world, Paddle::player(center_y));
        create_ball(&mut world, Ball::serve(&field, &config, &mut rng));

        Self {
            world,
            field,
            config,
            time: Time::new(0.0, now_ms),
            events: Events::new(),
            rng,
            paused: false,
            sound_enabled: true,
        }
    }

    /// Run one tick of `dt` delta units stamped at `now_ms`; paused games
    /// keep the clock but do not move
    pub fn advance(&mut self, dt: f32, now_ms: f64) -> Option<ScoreEvent> {
        self.time = Time::new(dt, now_ms);
        if self.paused {
            return None;
        }
        step(
            &mut self.world,
            &self.time,
            &self.field,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
        self.events.scored
    }

    pub fn set_player_y(&mut self, y: f32) -> Result<(), GameError> {
        apply_pointer(&mut self.world, &self.field, y)
    }

    /// Rescale the live game to a new unit, returning the ratio
    pub fn resize(&mut self, new_unit: f32) -> f32 {
        rescale(&mut self.world, &mut self.field, new_unit)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn player(&self) -> Option<Paddle> {
        self.paddle(Side::Player)
    }

    pub fn computer(&self) -> Option<Paddle> {
        self.paddle(Side::Computer)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn scores(&self) -> Score {
        Score {
            computer: self.computer().map_or(0, |p| p.score),
            player: self.player().map_or(0, |p| p.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let field = PlayField::from_unit(1.5);
        let game = GameState::new(field, Config::new(), 7, 1000.0);

        let player = game.player().unwrap();
        let computer = game.computer().unwrap();
        assert_eq!(player.y, 360.0);
        assert_eq!(computer.y, 360.0);
        assert_eq!(computer.speed, Some(2.0));
        assert_eq!(game.scores(), Score::new());

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, field.center());
        assert_eq!(ball.vel.x.abs(), 1.5);
        assert_eq!(ball.radius, 7.5);
        assert!(!game.paused);
        assert_eq!(game.time.now, 1000.0);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(PlayField::default(), Config::new(), 42, 0.0);
        let b = GameState::new(PlayField::default(), Config::new(), 42, 0.0);
        assert_eq!(a.ball(), b.ball());
    }

    #[test]
    fn test_paused_game_does_not_move() {
        let mut game = GameState::new(PlayField::default(), Config::new(), 1, 0.0);
        game.paused = true;
        let before = game.ball();
        assert_eq!(game.advance(5.0, 1000.0), None);
        assert_eq!(game.ball(), before);
        assert_eq!(game.time.now, 1000.0);
    }

    #[test]
    fn test_advance_moves_ball() {
        let mut game = GameState::new(PlayField::default(), Config::new(), 1, 0.0);
        let before = game.ball().unwrap();
        game.advance(1.0, 1010.0);
        let after = game.ball().unwrap();
        assert_eq!(after.pos, before.pos + before.vel);
        assert_eq!(game.time, Time::new(1.0, 1010.0));
    }

    #[test]
    fn test_set_player_y() {
        let mut game = GameState::new(PlayField::default(), Config::new(), 1, 0.0);
        assert!(game.set_player_y(100.0).is_ok());
        assert_eq!(game.player().unwrap().y, 100.0);
        assert!(game.set_player_y(10.0).is_err());
        assert_eq!(game.player().unwrap().y, 100.0);
    }
}
