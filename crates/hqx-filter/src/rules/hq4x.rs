//! 4× rule table
//!
//! Each source pixel expands to a 4×4 block, slots in row-major order.

use super::Corner::{BottomLeft, BottomRight, TopLeft, TopRight};
use super::Op::{Edge, Mix};
use super::{Op, RuleTable, blend2, blend3, center};

/// Pattern-to-rule table for 4× magnification.
pub static HQ4X: RuleTable = RuleTable {
    scale: 4,
    index: &INDEX,
    rules: &RULES,
};

#[rustfmt::skip]
static INDEX: [u8; 256] = [
      0,   0,   1,   5,   0,   0,   6,  19,   4,  12,  16,  26,   4,  12,  34,  83,
      2,   2,  13,  27,   7,   7,  23,  76,  18,  42,  43,  47,  37,  55,  51,  43,
      0,   0,   1,   5,   0,   0,   6,  19,  11,  22,  33,  82,  11,  22, 117, 133,
      2,   2,  13,  27,   7,   7,  23,  76,  41,  59,  67, 104,  63,  94,  86, 144,
      3,   3,  17,  35,   3,   3,  36,  60,  15,  32,  46,  54,  15,  32,  71, 107,
     14,  14,  44,  68,  29,  29,  48, 106,  45,  74,  75, 111,  69, 114, 109, 138,
     10,  10,  40,  58,  10,  10,  65,  96,  25,  81,  50,  46,  25,  81,  90, 143,
     30,  30,  73, 113, 119, 119,  88, 131,  53, 105, 108, 137,  84, 124, 122, 152,
      0,   0,   1,   5,   0,   0,   6,  19,   4,  12,  16,  26,   4,  12,  34,  83,
      8,   8,  28, 118,  20,  20,  77, 134,  38,  66,  72,  91,  61,  95, 101, 145,
      0,   0,   1,   5,   0,   0,   6,  19,  11,  22,  33,  82,  11,  22, 117, 133,
      8,   8,  28, 118,  20,  20,  77, 134,  57,  93, 112, 129,  92, 120, 128, 153,
      9,   9,  39,  64,   9,   9,  56,  99,  31, 116,  70,  85,  31, 116, 115, 126,
     24,  24,  52,  87,  78,  78,  44, 146,  49,  89, 110, 123, 100, 125, 139, 154,
     21,  21,  62,  97,  21,  21,  98, 121,  80, 132, 102, 142,  80, 132, 127, 151,
     79,  79, 103, 130, 135, 135, 147, 155,  45, 141, 136, 150, 140, 149, 148, 156,
];

static RULES: [&[Op]; 157] = [
    // 0: 0 1 4 32 128 5 132 160 33 129 36 133 164 161 37 165
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 1: 2 34 130 162
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 2: 16 17 48 49
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 3: 64 65 68 69
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 4: 8 12 136 140
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 5: 3 35 131 163
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 6: 6 38 134 166
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 7: 20 21 52 53
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 8: 144 145 176 177
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 9: 192 193 196 197
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 10: 96 97 100 101
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 11: 40 44 168 172
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 12: 9 13 137 141
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 13: 18 50
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(1, 1, 4, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(5, 1, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 14: 80 81
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(7, 1, 4, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend2(7, 1, 5, 1)),
    ],
    // 15: 72 76
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(3, 1, 4, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 16: 10 138
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend2(1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(3, 1, 4, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 17: 66
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 18: 24
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 19: 7 39 135 167
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 20: 148 149 180 181
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 21: 224 228 225 229
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 22: 41 169 45 173
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 23: 22 54
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 24: 208 209
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 25: 104 108
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 26: 11 139
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 27: 19 51
    &[
        Edge(TopRight, blend2(4, 5, 3, 3), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 7, 3, 1), blend2(1, 3, 4, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(1, 5, 5, 3)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(5, 2, 4, 1, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 28: 146 178
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(1, 2, 4, 1, 5, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(5, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Edge(TopRight, blend2(4, 7, 7, 1), blend2(5, 3, 4, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Edge(TopRight, blend2(4, 5, 7, 3), blend2(4, 3, 5, 1)),
    ],
    // 29: 84 85
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Edge(BottomRight, blend2(4, 5, 1, 3), blend2(4, 3, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomRight, blend2(4, 7, 1, 1), blend2(5, 3, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(5, 5, 7, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(7, 2, 4, 1, 5, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend2(7, 1, 5, 1)),
    ],
    // 30: 112 113
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(5, 2, 4, 1, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 3, 3), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 7, 3, 1), blend2(7, 3, 4, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(7, 5, 5, 3)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend2(7, 1, 5, 1)),
    ],
    // 31: 200 204
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(3, 2, 4, 1, 7, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(7, 5, 3, 3)),
        Edge(BottomLeft, blend2(4, 7, 5, 1), blend2(7, 3, 4, 1)),
        Edge(BottomLeft, blend2(4, 5, 5, 3), blend2(4, 3, 7, 1)),
    ],
    // 32: 73 77
    &[
        Edge(BottomLeft, blend2(4, 5, 1, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 7, 1, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(3, 5, 7, 3)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(7, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 33: 42 170
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend2(1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(1, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(3, 5, 1, 3)),
        Edge(TopLeft, blend2(4, 7, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(TopLeft, blend2(4, 7, 7, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Edge(TopLeft, blend2(4, 5, 7, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 34: 14 142
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend2(1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(1, 5, 3, 3)),
        Edge(TopLeft, blend2(4, 7, 5, 1), blend2(1, 3, 4, 1)),
        Edge(TopLeft, blend2(4, 5, 5, 3), blend2(4, 3, 1, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(3, 2, 4, 1, 1, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 35: 67
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 36: 70
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 37: 28
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 38: 152
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 39: 194
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 40: 98
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 41: 56
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 42: 25
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 43: 26 31
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 44: 82 214
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 45: 88 248
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 46: 74 107
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 47: 27
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 48: 86
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 49: 216
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 50: 106
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 51: 30
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 52: 210
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 53: 120
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 54: 75
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 55: 29
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 56: 198
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 57: 184
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 58: 99
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 59: 57
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 60: 71
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 61: 156
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 62: 226
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 63: 60
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 64: 195
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 65: 102
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 66: 153
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 67: 58
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 68: 83
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 69: 92
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 70: 202
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 71: 78
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 72: 154
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 73: 114
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 74: 89
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 75: 90
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 76: 55 23
    &[
        Edge(TopRight, blend2(4, 5, 3, 3), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 7, 3, 1), blend2(1, 3, 4, 1)),
        Edge(TopRight, center(), blend2(1, 5, 5, 3)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, center(), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, center(), blend3(5, 2, 4, 1, 1, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 77: 182 150
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(1, 2, 4, 1, 5, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, center(), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, center(), blend2(5, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Edge(TopRight, blend2(4, 7, 7, 1), blend2(5, 3, 4, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Edge(TopRight, blend2(4, 5, 7, 3), blend2(4, 3, 5, 1)),
    ],
    // 78: 213 212
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Edge(BottomRight, blend2(4, 5, 1, 3), blend2(4, 3, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomRight, blend2(4, 7, 1, 1), blend2(5, 3, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, center(), blend2(5, 5, 7, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(7, 2, 4, 1, 5, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 79: 241 240
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, center(), blend3(5, 2, 4, 1, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 3, 3), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 7, 3, 1), blend2(7, 3, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 5, 5, 3)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 80: 236 232
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, center(), blend3(3, 2, 4, 1, 7, 1)),
        Edge(BottomLeft, center(), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 5, 3, 3)),
        Edge(BottomLeft, blend2(4, 7, 5, 1), blend2(7, 3, 4, 1)),
        Edge(BottomLeft, blend2(4, 5, 5, 3), blend2(4, 3, 7, 1)),
    ],
    // 81: 109 105
    &[
        Edge(BottomLeft, blend2(4, 5, 1, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 7, 1, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, center(), blend2(3, 5, 7, 3)),
        Edge(BottomLeft, center(), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend3(7, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 82: 171 43
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend3(1, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 5, 1, 3)),
        Edge(TopLeft, center(), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(TopLeft, blend2(4, 7, 7, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Edge(TopLeft, blend2(4, 5, 7, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 83: 143 15
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 5, 3, 3)),
        Edge(TopLeft, blend2(4, 7, 5, 1), blend2(1, 3, 4, 1)),
        Edge(TopLeft, blend2(4, 5, 5, 3), blend2(4, 3, 1, 1)),
        Edge(TopLeft, center(), blend3(3, 2, 4, 1, 1, 1)),
        Edge(TopLeft, center(), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 84: 124
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 85: 203
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 86: 62
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 87: 211
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 88: 118
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 89: 217
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 90: 110
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 91: 155
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 92: 188
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 93: 185
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 94: 61
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 95: 157
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 96: 103
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 97: 227
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 98: 230
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 99: 199
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 100: 220
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 101: 158
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 102: 234
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 103: 242
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 104: 59
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 105: 121
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 106: 87
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 107: 79
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 108: 122
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 109: 94
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 110: 218
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 111: 91
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 112: 186
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 113: 115
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 114: 93
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 115: 206
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 116: 205 201
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 3, 1)),
        Edge(BottomLeft, blend2(4, 7, 6, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, blend2(4, 5, 6, 3), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend2(4, 3, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 117: 174 46
    &[
        Edge(TopLeft, blend2(4, 5, 0, 3), blend3(4, 2, 1, 1, 3, 1)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(TopLeft, blend2(4, 3, 0, 1), blend2(4, 3, 3, 1)),
        Edge(TopLeft, blend2(4, 7, 0, 1), center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 118: 179 147
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 5, 2, 3), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, blend2(4, 7, 2, 1), center()),
        Edge(TopRight, blend2(4, 3, 2, 1), blend2(4, 3, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 119: 117 116
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 7, 8, 1), center()),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 8, 3), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 120: 189
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 121: 231
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 122: 126
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 123: 219
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 124: 125
    &[
        Edge(BottomLeft, blend2(4, 5, 1, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Edge(BottomLeft, blend2(4, 7, 1, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, center(), blend2(3, 5, 7, 3)),
        Edge(BottomLeft, center(), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend3(7, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 125: 221
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Edge(BottomRight, blend2(4, 5, 1, 3), blend2(4, 3, 5, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomRight, blend2(4, 7, 1, 1), blend2(5, 3, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, center(), blend2(5, 5, 7, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(7, 2, 4, 1, 5, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 126: 207
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 5, 3, 3)),
        Edge(TopLeft, blend2(4, 7, 5, 1), blend2(1, 3, 4, 1)),
        Edge(TopLeft, blend2(4, 5, 5, 3), blend2(4, 3, 1, 1)),
        Edge(TopLeft, center(), blend3(3, 2, 4, 1, 1, 1)),
        Edge(TopLeft, center(), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 127: 238
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend3(3, 2, 4, 1, 7, 1)),
        Edge(BottomLeft, center(), blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 5, 3, 3)),
        Edge(BottomLeft, blend2(4, 7, 5, 1), blend2(7, 3, 4, 1)),
        Edge(BottomLeft, blend2(4, 5, 5, 3), blend2(4, 3, 7, 1)),
    ],
    // 128: 190
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(1, 2, 4, 1, 5, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Edge(TopRight, center(), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, center(), blend2(5, 5, 1, 3)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Edge(TopRight, blend2(4, 7, 7, 1), blend2(5, 3, 4, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Edge(TopRight, blend2(4, 5, 7, 3), blend2(4, 3, 5, 1)),
    ],
    // 129: 187
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend3(1, 2, 4, 1, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 5, 1, 3)),
        Edge(TopLeft, center(), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(TopLeft, blend2(4, 7, 7, 1), blend2(3, 3, 4, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Edge(TopLeft, blend2(4, 5, 7, 3), blend2(4, 3, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 130: 243
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 6, 5, 1, 7, 1)),
        Edge(BottomRight, center(), blend3(5, 2, 4, 1, 7, 1)),
        Edge(BottomRight, blend2(4, 5, 3, 3), blend2(4, 3, 7, 1)),
        Edge(BottomRight, blend2(4, 7, 3, 1), blend2(7, 3, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 5, 5, 3)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 131: 119
    &[
        Edge(TopRight, blend2(4, 5, 3, 3), blend2(4, 3, 1, 1)),
        Edge(TopRight, blend2(4, 7, 3, 1), blend2(1, 3, 4, 1)),
        Edge(TopRight, center(), blend2(1, 5, 5, 3)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Edge(TopRight, center(), blend3(4, 6, 5, 1, 1, 1)),
        Edge(TopRight, center(), blend3(5, 2, 4, 1, 1, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 132: 237 233
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend3(4, 6, 5, 1, 1, 1)),
        Mix(blend3(4, 5, 5, 2, 1, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 133: 175 47
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 6, 5, 1, 7, 1)),
        Mix(blend3(4, 5, 5, 2, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 134: 183 151
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 6, 3, 1, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 5, 7, 2, 3, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 135: 245 244
    &[
        Mix(blend3(4, 2, 1, 1, 3, 1)),
        Mix(blend3(4, 5, 1, 2, 3, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 136: 250
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 137: 123
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 138: 95
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 139: 222
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 140: 252
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend3(4, 5, 1, 2, 0, 1)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 141: 249
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend3(4, 5, 1, 2, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 142: 235
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend3(4, 5, 5, 2, 2, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 143: 111
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend3(4, 5, 5, 2, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 144: 63
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend3(4, 5, 7, 2, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 145: 159
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend3(4, 5, 7, 2, 6, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 146: 215
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend3(4, 5, 3, 2, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 147: 246
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend3(4, 5, 3, 2, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 148: 254
    &[
        Mix(blend2(4, 5, 0, 3)),
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 7, 0, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 149: 253
    &[
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 5, 1, 3)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(blend2(4, 7, 1, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 150: 251
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 5, 2, 3)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 2, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 151: 239
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 5, 1)),
        Mix(blend2(4, 5, 5, 3)),
    ],
    // 152: 127
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend2(1, 1, 4, 1)),
        Edge(TopRight, center(), blend2(1, 1, 5, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend2(5, 1, 4, 1)),
        Edge(BottomLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(blend2(4, 7, 8, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 3, 1)),
        Edge(BottomLeft, center(), blend2(7, 1, 4, 1)),
        Mix(blend2(4, 3, 8, 1)),
        Mix(blend2(4, 5, 8, 3)),
    ],
    // 153: 191
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 7, 7, 1)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
        Mix(blend2(4, 5, 7, 3)),
    ],
    // 154: 223
    &[
        Edge(TopLeft, center(), blend2(1, 1, 3, 1)),
        Edge(TopLeft, center(), blend2(1, 1, 4, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(TopLeft, center(), blend2(3, 1, 4, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 7, 6, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend2(5, 1, 4, 1)),
        Mix(blend2(4, 5, 6, 3)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 4, 1)),
        Edge(BottomRight, center(), blend2(7, 1, 5, 1)),
    ],
    // 155: 247
    &[
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Mix(center()),
        Mix(blend2(4, 5, 3, 3)),
        Mix(blend2(4, 7, 3, 1)),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
    // 156: 255
    &[
        Edge(TopLeft, center(), blend3(4, 2, 1, 1, 3, 1)),
        Mix(center()),
        Mix(center()),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Mix(center()),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(center()),
        Mix(center()),
        Edge(BottomRight, center(), blend3(4, 2, 7, 1, 5, 1)),
    ],
];
