//! Text layout constants

/// Opening of the banner header: `Sparse Matrix (<rows>x<cols>):`
pub const BANNER_PREFIX: &str = "Sparse Matrix (";

/// Closing of the banner header
pub const BANNER_SUFFIX: &str = "):";

/// Separator between row and column counts in the banner header
pub const BANNER_DIM_SEPARATOR: char = 'x';

/// Key of the first assignment header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second assignment header line
pub const COLS_KEY: &str = "cols";

/// Separator between key and value in assignment header lines
pub const ASSIGN: char = '=';

/// Entry lines start with this character; all other body lines are skipped
pub const ENTRY_OPEN: char = '(';

/// Entry lines end with this character
pub const ENTRY_CLOSE: char = ')';

/// Separator between the three fields of an entry
pub const FIELD_SEPARATOR: char = ',';
