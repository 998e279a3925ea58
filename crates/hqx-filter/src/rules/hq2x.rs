//! 2× rule table
//!
//! Each source pixel expands to a 2×2 block. Slots are listed in
//! row-major order: top-left, top-right, bottom-left, bottom-right.

use super::Corner::{BottomLeft, BottomRight, TopLeft, TopRight};
use super::Op::{Edge, Mix};
use super::{Op, RuleTable, blend2, blend3, center};

/// Pattern-to-rule table for 2× magnification.
pub static HQ2X: RuleTable = RuleTable {
    scale: 2,
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
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 1: 2 34 130 162
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 2: 16 17 48 49
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 3: 64 65 68 69
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 4: 8 12 136 140
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 5: 3 35 131 163
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 6: 6 38 134 166
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 7: 20 21 52 53
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 8: 144 145 176 177
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 9: 192 193 196 197
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 10: 96 97 100 101
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 11: 40 44 168 172
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 12: 9 13 137 141
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 13: 18 50
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 14: 80 81
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 15: 72 76
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 16: 10 138
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 17: 66
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 18: 24
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 19: 7 39 135 167
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 20: 148 149 180 181
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 21: 224 228 225 229
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 22: 41 169 45 173
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 23: 22 54
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 24: 208 209
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 25: 104 108
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 26: 11 139
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 27: 19 51
    &[
        Edge(TopRight, blend2(4, 3, 3, 1), blend3(4, 5, 1, 2, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 28: 146 178
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 7, 1), blend3(4, 5, 5, 2, 7, 1)),
    ],
    // 29: 84 85
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Edge(BottomRight, blend2(4, 3, 1, 1), blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 30: 112 113
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomRight, blend2(4, 3, 3, 1), blend3(4, 5, 7, 2, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 31: 200 204
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 2, 7, 3, 3, 3)),
        Edge(BottomLeft, blend2(4, 3, 5, 1), blend3(4, 5, 7, 2, 5, 1)),
    ],
    // 32: 73 77
    &[
        Edge(BottomLeft, blend2(4, 3, 1, 1), blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 2, 7, 3, 3, 3)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 33: 42 170
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 2, 3, 3, 1, 3)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 7, 1), blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 34: 14 142
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 2, 3, 3, 1, 3)),
        Edge(TopLeft, blend2(4, 3, 5, 1), blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 35: 67
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 36: 70
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 37: 28
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 38: 152
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 39: 194
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 40: 98
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 41: 56
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 42: 25
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 43: 26 31
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 44: 82 214
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 45: 88 248
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 46: 74 107
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 47: 27
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 48: 86
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 49: 216
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 50: 106
    &[
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 51: 30
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 52: 210
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 53: 120
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 54: 75
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 55: 29
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 56: 198
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 57: 184
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 58: 99
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 59: 57
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 60: 71
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 61: 156
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 62: 226
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 63: 60
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 64: 195
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 65: 102
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 66: 153
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 67: 58
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 68: 83
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 69: 92
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 70: 202
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 71: 78
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 72: 154
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 73: 114
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 74: 89
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 75: 90
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 76: 55 23
    &[
        Edge(TopRight, blend2(4, 3, 3, 1), blend3(4, 5, 1, 2, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 77: 182 150
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 7, 1), blend3(4, 5, 5, 2, 7, 1)),
    ],
    // 78: 213 212
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Edge(BottomRight, blend2(4, 3, 1, 1), blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 79: 241 240
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomRight, blend2(4, 3, 3, 1), blend3(4, 5, 7, 2, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 80: 236 232
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 3, 3, 3)),
        Edge(BottomLeft, blend2(4, 3, 5, 1), blend3(4, 5, 7, 2, 5, 1)),
    ],
    // 81: 109 105
    &[
        Edge(BottomLeft, blend2(4, 3, 1, 1), blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 3, 3, 3)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 82: 171 43
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 3, 1, 3)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(TopLeft, blend2(4, 3, 7, 1), blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 83: 143 15
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 3, 1, 3)),
        Edge(TopLeft, blend2(4, 3, 5, 1), blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 84: 124
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 85: 203
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 86: 62
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 87: 211
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 88: 118
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 89: 217
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 90: 110
    &[
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 91: 155
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 92: 188
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 93: 185
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 94: 61
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 95: 157
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 96: 103
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 97: 227
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 98: 230
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 99: 199
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 100: 220
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 101: 158
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 102: 234
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 103: 242
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 104: 59
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 105: 121
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 106: 87
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 107: 79
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 108: 122
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 109: 94
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 110: 218
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 111: 91
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 112: 186
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 113: 115
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 114: 93
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 115: 206
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 116: 205 201
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, blend2(4, 3, 6, 1), blend3(4, 6, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 117: 174 46
    &[
        Edge(TopLeft, blend2(4, 3, 0, 1), blend3(4, 6, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 118: 179 147
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, blend2(4, 3, 2, 1), blend3(4, 6, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 119: 117 116
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, blend2(4, 3, 8, 1), blend3(4, 6, 5, 1, 7, 1)),
    ],
    // 120: 189
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 121: 231
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 122: 126
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 123: 219
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 124: 125
    &[
        Edge(BottomLeft, blend2(4, 3, 1, 1), blend3(4, 5, 3, 2, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 3, 3, 3)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 125: 221
    &[
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomRight, blend2(4, 3, 1, 1), blend3(4, 5, 5, 2, 1, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 126: 207
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 3, 1, 3)),
        Edge(TopLeft, blend2(4, 3, 5, 1), blend3(4, 5, 1, 2, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 127: 238
    &[
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 3, 3, 3)),
        Edge(BottomLeft, blend2(4, 3, 5, 1), blend3(4, 5, 7, 2, 5, 1)),
    ],
    // 128: 190
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend2(4, 3, 7, 1)),
        Edge(TopRight, blend2(4, 3, 7, 1), blend3(4, 5, 5, 2, 7, 1)),
    ],
    // 129: 187
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 3, 1, 3)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(TopLeft, blend2(4, 3, 7, 1), blend3(4, 5, 3, 2, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 130: 243
    &[
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomRight, blend2(4, 3, 3, 1), blend3(4, 5, 7, 2, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 3, 7, 3)),
    ],
    // 131: 119
    &[
        Edge(TopRight, blend2(4, 3, 3, 1), blend3(4, 5, 1, 2, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 3, 5, 3)),
        Mix(blend2(4, 3, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 132: 237 233
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 133: 175 47
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 134: 183 151
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 135: 245 244
    &[
        Mix(blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 136: 250
    &[
        Mix(blend2(4, 3, 0, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 137: 123
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 138: 95
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 139: 222
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 140: 252
    &[
        Mix(blend3(4, 2, 0, 1, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 141: 249
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 142: 235
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend3(4, 2, 2, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 143: 111
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend3(4, 2, 8, 1, 5, 1)),
    ],
    // 144: 63
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend3(4, 2, 8, 1, 7, 1)),
    ],
    // 145: 159
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 146: 215
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend3(4, 2, 6, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 147: 246
    &[
        Mix(blend3(4, 2, 0, 1, 3, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 148: 254
    &[
        Mix(blend2(4, 3, 0, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 149: 253
    &[
        Mix(blend2(4, 3, 1, 1)),
        Mix(blend2(4, 3, 1, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 150: 251
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 2, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 151: 239
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Mix(blend2(4, 3, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 5, 1)),
    ],
    // 152: 127
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 2, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 2, 7, 1, 3, 1)),
        Mix(blend2(4, 3, 8, 1)),
    ],
    // 153: 191
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 7, 1)),
        Mix(blend2(4, 3, 7, 1)),
    ],
    // 154: 223
    &[
        Edge(TopLeft, center(), blend3(4, 2, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 6, 1)),
        Edge(BottomRight, center(), blend3(4, 2, 5, 1, 7, 1)),
    ],
    // 155: 247
    &[
        Mix(blend2(4, 3, 3, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Mix(blend2(4, 3, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
    // 156: 255
    &[
        Edge(TopLeft, center(), blend3(4, 14, 3, 1, 1, 1)),
        Edge(TopRight, center(), blend3(4, 14, 1, 1, 5, 1)),
        Edge(BottomLeft, center(), blend3(4, 14, 7, 1, 3, 1)),
        Edge(BottomRight, center(), blend3(4, 14, 5, 1, 7, 1)),
    ],
];
