// Shared visual tuning constants used by the engine and the web frontend.

// Off-screen marker meaning "no real pointer position yet". Validity is
// checked as both coordinates non-negative, so the origin stays a legal
// on-screen position.
pub const POSITION_SENTINEL: f32 = -100.0;

// Default trail color, a desaturated neon green.
pub const DEFAULT_NEON_RGB: [f32; 3] = [0.27, 0.63, 0.40];

// Cursor glyph sizing (diameter, CSS px)
pub const CURSOR_SIZE: f32 = 12.0; // idle white dot
pub const CURSOR_SIZE_PRESSED: f32 = 10.0; // shrinks slightly while the button is held

// The live pointer position is appended as a synthetic curve endpoint only
// when it sits further than this from the last stored point.
pub const SYNTHETIC_ENDPOINT_MIN_DISTANCE: f32 = 0.5;

// How many of the oldest points feed the tail-advance velocity average
// once the pointer has stopped.
pub const TAIL_AVERAGE_WINDOW: usize = 5;
