mod bit_math;
pub use bit_math::*;

mod liquidity_math;
pub use liquidity_math::*;

mod tick_math;
pub use tick_math::*;

mod tick_spacing;
pub use tick_spacing::*;
