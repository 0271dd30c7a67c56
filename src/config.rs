/// Game parameters. There are no CLI flags; the binary runs with the
/// defaults and tests build smaller boards through `new`.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Playfield width, in cells.
    pub grid_width: i16,
    /// Playfield height, in cells.
    pub grid_height: i16,
    /// Fixed simulation rate, in ticks per second.
    pub tick_rate: u32,
    /// How many cells the snake grows per piece of food.
    pub growth_per_food: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: 32,
            grid_height: 24,
            tick_rate: 10,
            growth_per_food: 1,
        }
    }
}

impl GameConfig {
    pub fn new(grid_width: i16, grid_height: i16) -> Self {
        GameConfig { grid_width, grid_height, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.tick_rate, 10);
        assert_eq!(config.growth_per_food, 1);
    }

    #[test]
    fn custom_board_keeps_other_defaults() {
        let config = GameConfig::new(10, 8);
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 8);
        assert_eq!(config.growth_per_food, 1);
    }
}
