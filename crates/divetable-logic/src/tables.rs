//! Literal planner table data.
//!
//! Rows are transcribed from the printed Recreational Dive Planner and are
//! read-only for the life of the process. Lookup logic lives in
//! [`crate::resolver`], [`crate::surface_interval`] and [`crate::residual`].

use crate::depth::Minutes;
use crate::group::PressureGroup;
use crate::group::PressureGroup::*;
use crate::surface_interval::SurfaceTransition;

const fn span(to: PressureGroup, min: Minutes, max: Minutes) -> SurfaceTransition {
    SurfaceTransition {
        to,
        min,
        max: Some(max),
    }
}

const fn open(to: PressureGroup, min: Minutes) -> SurfaceTransition {
    SurfaceTransition { to, min, max: None }
}

/// Pressure group rows, one per depth in [`crate::depth::Depth::ALL`] order.
///
/// Each row is `(max bottom time, group)`, ascending. The final entry's time
/// equals the depth's absolute limit.
pub(crate) static PRESSURE_GROUP_ROWS: [&[(Minutes, PressureGroup)]; 12] = [
    // 35 ft
    &[
        (10, A), (19, B), (25, C), (29, D), (32, E), (36, F), (40, G), (44, H), (48, I),
        (52, J), (57, K), (62, L), (67, M), (73, N), (79, O), (85, P), (92, Q), (100, R),
        (108, S), (117, T), (127, U), (139, V), (152, W), (168, X), (188, Y), (205, Z),
    ],
    // 40 ft
    &[
        (9, A), (16, B), (22, C), (25, D), (27, E), (31, F), (34, G), (37, H), (40, I),
        (44, J), (48, K), (51, L), (55, M), (60, N), (64, O), (69, P), (74, Q), (79, R),
        (85, S), (91, T), (97, U), (104, V), (111, W), (120, X), (129, Y), (140, Z),
    ],
    // 50 ft
    &[
        (7, A), (13, B), (17, C), (19, D), (21, E), (24, F), (26, G), (28, H), (31, I),
        (33, J), (36, K), (38, L), (41, M), (44, N), (47, O), (50, P), (53, Q), (57, R),
        (60, S), (63, T), (67, U), (71, V), (75, W), (80, X),
    ],
    // 60 ft
    &[
        (6, A), (11, B), (14, C), (16, D), (17, E), (19, F), (21, G), (23, H), (25, I),
        (27, J), (29, K), (31, L), (33, M), (35, N), (37, O), (39, P), (42, Q), (44, R),
        (47, S), (49, T), (52, U), (54, V), (55, W),
    ],
    // 70 ft
    &[
        (5, A), (9, B), (12, C), (13, D), (15, E), (16, F), (18, G), (19, H), (21, I), (22, J),
        (24, K), (26, L), (27, M), (29, N), (31, O), (33, P), (35, Q), (36, R), (38, S),
        (40, T),
    ],
    // 80 ft
    &[
        (4, A), (8, B), (10, C), (11, D), (13, E), (14, F), (15, G), (17, H), (18, I), (19, J),
        (21, K), (22, L), (23, M), (25, N), (26, O), (28, P), (29, Q), (30, R),
    ],
    // 90 ft
    &[
        (4, A), (7, B), (9, C), (10, D), (11, E), (12, F), (13, G), (15, H), (16, I), (17, J),
        (18, K), (19, L), (21, M), (22, N), (23, O), (24, P), (25, Q),
    ],
    // 100 ft
    &[
        (3, A), (6, B), (8, C), (9, D), (10, E), (11, F), (12, G), (13, H), (14, I), (15, J),
        (16, K), (17, L), (18, M), (19, N), (20, O),
    ],
    // 110 ft
    &[
        (3, A), (5, B), (7, C), (8, D), (9, E), (10, F), (11, G), (12, H), (13, I), (14, J),
        (15, K), (16, L),
    ],
    // 120 ft
    &[
        (3, A), (5, B), (6, C), (7, D), (8, E), (9, F), (10, G), (11, H), (12, I), (13, J),
    ],
    // 130 ft
    &[
        (3, A), (4, B), (5, C), (6, D), (7, E), (8, F), (9, G), (10, H),
    ],
    // 140 ft
    &[
        (3, A), (4, B), (5, C), (6, D), (7, E), (8, F),
    ],
];

/// Residual nitrogen minutes, one row per depth in [`crate::depth::Depth::ALL`] order,
/// indexed by `PressureGroup::index`. Groups past the end of a row have no
/// entry at that depth.
pub(crate) static RESIDUAL_NITROGEN_ROWS: [&[Minutes]; 12] = [
    // 35 ft
    &[
        10, 19, 25, 29, 32, 36, 40, 44, 48, 52, 57, 62, 67, 73, 79, 85, 92, 100, 108, 117, 127,
        139, 152, 168, 188, 205,
    ],
    // 40 ft
    &[
        9, 16, 22, 25, 27, 31, 34, 37, 40, 44, 48, 51, 55, 60, 64, 69, 74, 79, 85, 91, 97, 104,
        111, 120, 129, 140,
    ],
    // 50 ft
    &[
        7, 13, 17, 19, 21, 24, 26, 28, 31, 33, 36, 38, 41, 44, 47, 50, 53, 57, 60, 63, 67, 71,
        75, 80,
    ],
    // 60 ft
    &[
        6, 11, 14, 16, 17, 19, 21, 23, 25, 27, 29, 31, 33, 35, 37, 39, 42, 44, 47, 49, 52, 54,
        55,
    ],
    // 70 ft
    &[
        5, 9, 12, 13, 15, 16, 18, 19, 21, 22, 24, 26, 27, 29, 31, 33, 35, 36, 38, 40,
    ],
    // 80 ft
    &[
        4, 8, 10, 11, 13, 14, 15, 17, 18, 19, 21, 22, 23, 25, 26, 28, 29, 30,
    ],
    // 90 ft
    &[
        4, 7, 9, 10, 11, 12, 13, 15, 16, 17, 18, 19, 21, 22, 23, 24, 25,
    ],
    // 100 ft
    &[
        3, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    ],
    // 110 ft
    &[
        3, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    ],
    // 120 ft
    &[
        3, 5, 6, 7, 8, 9, 10, 11, 12, 13,
    ],
    // 130 ft
    &[
        3, 4, 5, 6, 7, 8, 9, 10,
    ],
    // 140 ft
    &[
        3, 4, 5, 6, 7, 8,
    ],
];

/// Surface interval transitions, one row per starting group in
/// `PressureGroup::ALL` order. Rows run from the highest ending group
/// (shortest interval) down to `A`, whose range is unbounded.
pub(crate) static SURFACE_INTERVAL_ROWS: [&[SurfaceTransition]; 26] = [
    // A
    &[open(A, 0)],
    // B
    &[open(A, 0)],
    // C
    &[open(A, 0)],
    // D
    &[open(A, 0)],
    // E
    &[open(A, 0)],
    // F
    &[open(A, 0)],
    // G
    &[
        span(B, 0, 0), open(A, 1),
    ],
    // H
    &[
        span(C, 0, 0), span(B, 1, 1), open(A, 2),
    ],
    // I
    &[
        span(D, 0, 0), span(C, 1, 1), span(B, 2, 3), open(A, 4),
    ],
    // J
    &[
        span(E, 0, 1), span(D, 2, 2), span(C, 3, 4), span(B, 5, 7), open(A, 8),
    ],
    // K
    &[
        span(F, 0, 2), span(E, 3, 4), span(D, 5, 6), span(C, 7, 10), span(B, 11, 16),
        open(A, 17),
    ],
    // L
    &[
        span(G, 0, 3), span(F, 4, 5), span(E, 6, 7), span(D, 8, 11), span(C, 12, 17),
        span(B, 18, 25), open(A, 26),
    ],
    // M
    &[
        span(H, 0, 4), span(G, 5, 6), span(F, 7, 8), span(E, 9, 12), span(D, 13, 17),
        span(C, 18, 25), span(B, 26, 35), open(A, 36),
    ],
    // N
    &[
        span(I, 0, 4), span(H, 5, 6), span(G, 7, 9), span(F, 10, 12), span(E, 13, 17),
        span(D, 18, 24), span(C, 25, 34), span(B, 35, 45), open(A, 46),
    ],
    // O
    &[
        span(J, 0, 4), span(I, 5, 6), span(H, 7, 9), span(G, 10, 12), span(F, 13, 17),
        span(E, 18, 23), span(D, 24, 31), span(C, 32, 43), span(B, 44, 56), open(A, 57),
    ],
    // P
    &[
        span(K, 0, 4), span(J, 5, 6), span(I, 7, 9), span(H, 10, 12), span(G, 13, 16),
        span(F, 17, 22), span(E, 23, 29), span(D, 30, 39), span(C, 40, 53), span(B, 54, 66),
        open(A, 67),
    ],
    // Q
    &[
        span(L, 0, 4), span(K, 5, 6), span(J, 7, 8), span(I, 9, 11), span(H, 12, 15),
        span(G, 16, 21), span(F, 22, 28), span(E, 29, 36), span(D, 37, 47), span(C, 48, 62),
        span(B, 63, 77), open(A, 78),
    ],
    // R
    &[
        span(M, 0, 4), span(L, 5, 6), span(K, 7, 8), span(J, 9, 10), span(I, 11, 14),
        span(H, 15, 19), span(G, 20, 26), span(F, 27, 34), span(E, 35, 44), span(D, 45, 56),
        span(C, 57, 72), span(B, 73, 88), open(A, 89),
    ],
    // S
    &[
        span(N, 0, 3), span(M, 4, 5), span(L, 6, 7), span(K, 8, 10), span(J, 11, 13),
        span(I, 14, 17), span(H, 18, 23), span(G, 24, 31), span(F, 32, 40), span(E, 41, 52),
        span(D, 53, 65), span(C, 66, 82), span(B, 83, 99), open(A, 100),
    ],
    // T
    &[
        span(O, 0, 3), span(N, 4, 4), span(M, 5, 6), span(L, 7, 9), span(K, 10, 12),
        span(J, 13, 16), span(I, 17, 21), span(H, 22, 28), span(G, 29, 37), span(F, 38, 47),
        span(E, 48, 60), span(D, 61, 74), span(C, 75, 92), span(B, 93, 110), open(A, 111),
    ],
    // U
    &[
        span(P, 0, 2), span(O, 3, 4), span(N, 5, 6), span(M, 7, 8), span(L, 9, 11),
        span(K, 12, 15), span(J, 16, 20), span(I, 21, 26), span(H, 27, 34), span(G, 35, 44),
        span(F, 45, 55), span(E, 56, 69), span(D, 70, 84), span(C, 85, 102), span(B, 103, 121),
        open(A, 122),
    ],
    // V
    &[
        span(Q, 0, 2), span(P, 3, 3), span(O, 4, 5), span(N, 6, 7), span(M, 8, 10),
        span(L, 11, 14), span(K, 15, 18), span(J, 19, 24), span(I, 25, 32), span(H, 33, 41),
        span(G, 42, 52), span(F, 53, 64), span(E, 65, 78), span(D, 79, 94), span(C, 95, 113),
        span(B, 114, 133), open(A, 134),
    ],
    // W
    &[
        span(R, 0, 1), span(Q, 2, 2), span(P, 3, 4), span(O, 5, 6), span(N, 7, 9),
        span(M, 10, 12), span(L, 13, 17), span(K, 18, 22), span(J, 23, 29), span(I, 30, 38),
        span(H, 39, 48), span(G, 49, 60), span(F, 61, 73), span(E, 74, 88), span(D, 89, 105),
        span(C, 106, 124), span(B, 125, 145), open(A, 146),
    ],
    // X
    &[
        span(S, 0, 1), span(R, 2, 2), span(Q, 3, 3), span(P, 4, 5), span(O, 6, 8),
        span(N, 9, 11), span(M, 12, 15), span(L, 16, 20), span(K, 21, 26), span(J, 27, 34),
        span(I, 35, 44), span(H, 45, 55), span(G, 56, 68), span(F, 69, 82), span(E, 83, 98),
        span(D, 99, 115), span(C, 116, 135), span(B, 136, 156), open(A, 157),
    ],
    // Y
    &[
        span(T, 0, 0), span(S, 1, 1), span(R, 2, 2), span(Q, 3, 4), span(P, 5, 6),
        span(O, 7, 9), span(N, 10, 13), span(M, 14, 18), span(L, 19, 24), span(K, 25, 31),
        span(J, 32, 40), span(I, 41, 51), span(H, 52, 63), span(G, 64, 76), span(F, 77, 91),
        span(E, 92, 108), span(D, 109, 126), span(C, 127, 146), span(B, 147, 168),
        open(A, 169),
    ],
    // Z
    &[
        span(U, 0, 0), span(T, 1, 1), span(S, 2, 2), span(R, 3, 3), span(Q, 4, 4),
        span(P, 5, 7), span(O, 8, 10), span(N, 11, 15), span(M, 16, 21), span(L, 22, 28),
        span(K, 29, 36), span(J, 37, 47), span(I, 48, 59), span(H, 60, 72), span(G, 73, 86),
        span(F, 87, 102), span(E, 103, 119), span(D, 120, 137), span(C, 138, 158),
        span(B, 159, 179), open(A, 180),
    ],
];
