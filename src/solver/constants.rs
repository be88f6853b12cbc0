/// Numbers accepted by default; the table grows combinatorially past this
pub const DEFAULT_MAX_NUMBERS: usize = 7;
