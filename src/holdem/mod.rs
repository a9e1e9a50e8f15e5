/// The equity engine and its entry points.
mod equity;
pub use self::equity::{
    BOARD_SIZE, ConvergencePoint, EquityGame, EquityResult, HOLE_CARDS, exact_equity,
    exact_equity_known_board, exact_equity_multi, exact_equity_multi_known_board,
    monte_carlo_convergence, monte_carlo_equity, monte_carlo_equity_known_board,
    monte_carlo_equity_multi, monte_carlo_equity_multi_known_board,
};

/// Statistics over repeated estimates.
mod summary;
pub use self::summary::EstimateSummary;

/// Reference scenarios for measuring the engine.
mod scenario;
pub use self::scenario::Scenario;
