//! XPM icon strips for the built-in algorithms. Black is transparent.

/// Single live state, 7x7.
pub const LIFE_7X7: &[&str] = &[
    "7 7 2 1",
    ". c #000000",
    "A c #FFFFFF",
    "..AAA..",
    ".AAAAA.",
    "AAAAAAA",
    "AAAAAAA",
    "AAAAAAA",
    ".AAAAA.",
    "..AAA..",
];

/// Single live state, 15x15.
pub const LIFE_15X15: &[&str] = &[
    "15 15 2 1",
    ". c #000000",
    "A c #FFFFFF",
    ".....AAAAA.....",
    "...AAAAAAAAA...",
    "..AAAAAAAAAAA..",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    "..AAAAAAAAAAA..",
    "...AAAAAAAAA...",
    ".....AAAAA.....",
];

/// Sensitized, ordinary and confluent states, 7x7.
pub const JVN_7X7: &[&str] = &[
    "7 21 2 1",
    ". c #000000",
    "A c #FFFFFF",
    "...A...",
    "..AAA..",
    ".AAAAA.",
    "AAAAAAA",
    ".AAAAA.",
    "..AAA..",
    "...A...",
    ".......",
    ".AAAAA.",
    ".AAAAA.",
    ".AAAAA.",
    ".AAAAA.",
    ".AAAAA.",
    ".......",
    "..AAA..",
    "..AAA..",
    "AAAAAAA",
    "AAAAAAA",
    "AAAAAAA",
    "..AAA..",
    "..AAA..",
];

/// Electron head, electron tail and conductor, 15x15.
pub const WIREWORLD_15X15: &[&str] = &[
    "15 45 2 1",
    ". c #000000",
    "A c #FFFFFF",
    ".......A.......",
    "......AAA......",
    ".....AAAAA.....",
    "....AAAAAAA....",
    "...AAAAAAAAA...",
    "..AAAAAAAAAAA..",
    ".AAAAAAAAAAAAA.",
    "AAAAAAAAAAAAAAA",
    ".AAAAAAAAAAAAA.",
    "..AAAAAAAAAAA..",
    "...AAAAAAAAA...",
    "....AAAAAAA....",
    ".....AAAAA.....",
    "......AAA......",
    ".......A.......",
    ".....AAAAA.....",
    "...AAAAAAAAA...",
    "..AAAAAAAAAAA..",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAA",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    "..AAAAAAAAAAA..",
    "...AAAAAAAAA...",
    ".....AAAAA.....",
    "...............",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    ".AAAAAAAAAAAAA.",
    "...............",
];
