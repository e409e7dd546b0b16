//! Fixed color tables consumed by the registry's post-processing pass.

use super::color::Rgb;

/// Upper bound on the number of cell states an algorithm may declare.
pub const MAX_STATES: usize = 256;

/// Every algorithm has at least a dead and a live state.
pub const MIN_STATES: usize = 2;

/// Most icons a single strip may contribute; slot 0 is the dead state.
pub const MAX_ICON_STATES: usize = 254;

/// Status bar backgrounds, cycled by algorithm index.
pub const STATUS_COLORS: [Rgb; 9] = [
    Rgb::new(255, 255, 206), // pale yellow
    Rgb::new(226, 250, 248), // pale blue
    Rgb::new(255, 233, 233), // pale pink
    Rgb::new(225, 255, 225), // pale green
    Rgb::new(243, 225, 255), // pale purple
    Rgb::new(255, 220, 180), // pale orange
    Rgb::new(200, 255, 255), // pale aqua
    Rgb::new(200, 200, 200), // pale gray
    Rgb::new(255, 255, 255), // white
];

/// Status color for the algorithm at `index`.
#[must_use]
pub fn status_color(index: usize) -> Rgb {
    STATUS_COLORS[index % STATUS_COLORS.len()]
}

/// Consecutive RGB triples used when an algorithm leaves its cell colors
/// unset. Each entry is the color furthest in RGB space from the closest of
/// the colors before it, black and white.
pub const DEFAULT_PALETTE: [u8; MAX_STATES * 3] = [
    255, 127, 0, 0, 255, 127, 127, 0, 255, 148, 148, 148, 128, 255, 0, 255, 0, 128,
    0, 128, 255, 1, 159, 0, 159, 0, 1, 255, 254, 96, 0, 1, 159, 96, 255, 254,
    254, 96, 255, 126, 125, 21, 21, 126, 125, 125, 21, 126, 255, 116, 116, 116, 255, 116,
    116, 116, 255, 228, 227, 0, 28, 255, 27, 255, 27, 28, 0, 228, 227, 227, 0, 228,
    27, 28, 255, 59, 59, 59, 234, 195, 176, 175, 196, 255, 171, 194, 68, 194, 68, 171,
    68, 171, 194, 72, 184, 71, 184, 71, 72, 71, 72, 184, 169, 255, 188, 252, 179, 63,
    63, 252, 179, 179, 63, 252, 80, 9, 0, 0, 80, 9, 9, 0, 80, 255, 175, 250,
    199, 134, 213, 115, 100, 95, 188, 163, 0, 0, 188, 163, 163, 0, 188, 203, 73, 0,
    0, 203, 73, 73, 0, 203, 94, 189, 0, 189, 0, 94, 0, 94, 189, 187, 243, 119,
    55, 125, 32, 125, 32, 55, 32, 55, 125, 255, 102, 185, 102, 185, 255, 120, 209, 168,
    208, 166, 119, 135, 96, 192, 182, 255, 41, 83, 153, 130, 247, 88, 55, 89, 247, 55,
    88, 55, 247, 87, 75, 0, 0, 87, 75, 75, 0, 87, 200, 135, 59, 51, 213, 127,
    255, 255, 162, 255, 37, 182, 37, 182, 255, 228, 57, 117, 142, 163, 210, 57, 117, 228,
    193, 255, 246, 188, 107, 123, 123, 194, 107, 145, 59, 5, 5, 145, 59, 59, 5, 145,
    119, 39, 198, 40, 197, 23, 197, 23, 40, 23, 40, 197, 178, 199, 158, 255, 201, 121,
    134, 223, 223, 39, 253, 84, 149, 203, 15, 203, 15, 149, 15, 149, 203, 152, 144, 90,
    143, 75, 139, 71, 97, 132, 224, 65, 219, 65, 219, 224, 255, 255, 40, 218, 223, 69,
    74, 241, 0, 241, 0, 74, 0, 74, 241, 122, 171, 51, 220, 211, 227, 61, 127, 87,
    90, 124, 176, 36, 39, 13, 165, 142, 255, 255, 38, 255, 38, 255, 255, 83, 50, 107,
    224, 142, 165, 255, 181, 9, 9, 255, 181, 181, 9, 255, 140, 238, 70, 255, 74, 5,
    74, 5, 255, 138, 84, 51, 31, 172, 101, 177, 115, 17, 221, 0, 0, 0, 221, 0,
    0, 0, 221, 220, 255, 200, 0, 41, 50, 255, 150, 205, 178, 45, 116, 113, 255, 189,
    47, 0, 44, 40, 119, 171, 205, 107, 255, 177, 115, 172, 133, 73, 236, 109, 0, 168,
    168, 46, 207, 188, 181, 203, 212, 188, 35, 90, 97, 52, 39, 209, 184, 41, 164, 152,
    227, 46, 70, 46, 70, 227, 211, 156, 255, 98, 146, 222, 136, 56, 95, 102, 54, 152,
    86, 142, 0, 142, 0, 86, 0, 86, 142, 86, 223, 96, 246, 135, 46, 4, 208, 120,
    212, 233, 158, 177, 92, 214, 104, 147, 88, 149, 240, 147, 227, 93, 148, 72, 255, 133,
    209, 27, 194, 147, 255, 255, 44, 93, 0, 160, 36, 158, 182, 233, 0, 96, 94, 217,
    218, 103, 88, 163, 154, 38, 118, 114, 139, 94, 0, 43, 113, 164, 174, 168, 188, 114,
    0, 23, 119, 42, 86, 93, 255, 226, 202, 80, 191, 155, 255, 158, 136, 0, 247, 62,
    234, 146, 88, 0, 183, 229, 110, 212, 36, 0, 143, 161, 105, 191, 210, 133, 164, 0,
    41, 30, 89, 164, 0, 132, 30, 89, 42, 178, 222, 217, 121, 22, 11, 221, 107, 22,
    69, 151, 255, 45, 158, 3, 158, 3, 45, 3, 45, 158, 86, 42, 29, 9, 122, 22,
    213, 209, 110, 53, 221, 57, 159, 101, 91, 93, 140, 45, 247, 213, 37, 185, 34, 0,
    0, 185, 34, 34, 0, 185, 236, 0, 172, 210, 180, 78, 231, 107, 221, 162, 49, 43,
    43, 162, 49, 49, 43, 162, 36, 248, 213, 114, 0, 214, 213, 36, 248, 149, 34, 243,
    185, 158, 167, 144, 122, 224, 34, 245, 149, 255, 31, 98, 31, 98, 255, 152, 200, 193,
    255, 80, 95, 128, 123, 63, 102, 62, 72, 255, 62, 148, 151, 226, 108, 159, 99, 255,
    226, 255, 126, 98, 223, 136, 80, 95, 255, 225, 153, 15, 73, 41, 211, 212, 71, 41,
    83, 217, 187, 180, 235, 79, 0, 166, 127, 251, 135, 243, 229, 41, 0, 41, 0, 229,
    82, 255, 216, 141, 174, 249, 249, 215, 255, 167, 31, 79, 31, 79, 167, 213, 102, 185,
    255, 215, 83, 4, 2, 40, 224, 171, 220, 41, 0, 4, 6, 50, 90, 221, 15, 113,
    15, 113, 221, 33, 0, 115, 108, 23, 90, 182, 215, 36,
];
