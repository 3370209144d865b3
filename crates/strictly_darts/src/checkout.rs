//! Checkout suggestions for double-out finishes.
//!
//! Lookups here are advisory. The engine accepts any visit that reaches
//! zero; these tables only power "what should I aim for" displays and the
//! bot's decision to go for a finish.

use tracing::instrument;

/// Highest score that can be finished in three darts.
pub const MAX_CHECKOUT: u32 = 170;

/// Scores up to 170 that no three-dart double-out reaches.
pub const UNREACHABLE_CHECKOUTS: [u32; 7] = [159, 162, 163, 165, 166, 168, 169];

/// Preferred finish per remaining score, highest first.
static CHECKOUT_TABLE: &[(u32, &str)] = &[
    (170, "T20 T20 Bull"),
    (167, "T20 T19 Bull"),
    (164, "T19 T19 Bull"),
    (161, "T20 T17 Bull"),
    (160, "T20 T20 D20"),
    (158, "T20 T20 D19"),
    (157, "T20 T19 D20"),
    (156, "T20 T20 D18"),
    (155, "T20 T19 D19"),
    (154, "T19 T19 D20"),
    (153, "T20 T19 D18"),
    (152, "T20 T20 D16"),
    (151, "T20 T17 D20"),
    (150, "T19 T19 D18"),
    (149, "T20 T19 D16"),
    (148, "T20 T20 D14"),
    (147, "T20 T17 D18"),
    (146, "T19 T19 D16"),
    (145, "T20 T19 D14"),
    (144, "T20 T20 D12"),
    (143, "T20 T17 D16"),
    (142, "T20 T20 D11"),
    (141, "T20 T19 D12"),
    (140, "T20 T20 D10"),
    (139, "T20 T13 D20"),
    (138, "T19 T19 D12"),
    (137, "T20 T19 D10"),
    (136, "T20 T20 D8"),
    (135, "T20 T17 D12"),
    (134, "T19 T19 D10"),
    (133, "T20 T19 D8"),
    (132, "T20 T20 D6"),
    (131, "T20 T17 D10"),
    (130, "T19 T19 D8"),
    (129, "T20 T19 D6"),
    (128, "T20 T20 D4"),
    (127, "T20 T9 D20"),
    (126, "T20 T20 D3"),
    (125, "T20 T11 D16"),
    (124, "T20 T8 D20"),
    (123, "T20 T9 D18"),
    (122, "T20 T10 D16"),
    (121, "T20 T7 D20"),
    (120, "T20 20 D20"),
    (119, "T20 19 D20"),
    (118, "T20 18 D20"),
    (117, "T20 17 D20"),
    (116, "T20 16 D20"),
    (115, "T20 15 D20"),
    (114, "T20 14 D20"),
    (113, "T20 13 D20"),
    (112, "T20 12 D20"),
    (111, "T20 11 D20"),
    (110, "T20 Bull"),
    (109, "T20 9 D20"),
    (108, "T20 8 D20"),
    (107, "T19 Bull"),
    (106, "T20 6 D20"),
    (105, "T20 5 D20"),
    (104, "T18 Bull"),
    (103, "T20 3 D20"),
    (102, "T20 2 D20"),
    (101, "T17 Bull"),
    (100, "T20 D20"),
    (99, "T20 7 D16"),
    (98, "T20 D19"),
    (97, "T19 D20"),
    (96, "T20 D18"),
    (95, "T19 D19"),
    (94, "T18 D20"),
    (93, "T19 D18"),
    (92, "T20 D16"),
    (91, "T17 D20"),
    (90, "T18 D18"),
    (89, "T19 D16"),
    (88, "T20 D14"),
    (87, "T17 D18"),
    (86, "T18 D16"),
    (85, "T19 D14"),
    (84, "T20 D12"),
    (83, "T17 D16"),
    (82, "T20 D11"),
    (81, "T19 D12"),
    (80, "T20 D10"),
    (79, "T13 D20"),
    (78, "T18 D12"),
    (77, "T19 D10"),
    (76, "T20 D8"),
    (75, "T17 D12"),
    (74, "T18 D10"),
    (73, "T19 D8"),
    (72, "T20 D6"),
    (71, "T17 D10"),
    (70, "T10 D20"),
    (69, "T19 D6"),
    (68, "T20 D4"),
    (67, "T9 D20"),
    (66, "T20 D3"),
    (65, "T11 D16"),
    (64, "T8 D20"),
    (63, "T9 D18"),
    (62, "T10 D16"),
    (61, "T7 D20"),
    (60, "20 D20"),
    (59, "19 D20"),
    (58, "18 D20"),
    (57, "17 D20"),
    (56, "16 D20"),
    (55, "15 D20"),
    (54, "14 D20"),
    (53, "13 D20"),
    (52, "12 D20"),
    (51, "11 D20"),
    (50, "Bull"),
    (49, "9 D20"),
    (48, "8 D20"),
    (47, "7 D20"),
    (46, "6 D20"),
    (45, "5 D20"),
    (44, "4 D20"),
    (43, "3 D20"),
    (42, "2 D20"),
    (41, "1 D20"),
    (40, "D20"),
    (39, "7 D16"),
    (38, "D19"),
    (37, "5 D16"),
    (36, "D18"),
    (35, "3 D16"),
    (34, "D17"),
    (33, "1 D16"),
    (32, "D16"),
    (31, "7 D12"),
    (30, "D15"),
    (29, "5 D12"),
    (28, "D14"),
    (27, "3 D12"),
    (26, "D13"),
    (25, "1 D12"),
    (24, "D12"),
    (23, "3 D10"),
    (22, "D11"),
    (21, "1 D10"),
    (20, "D10"),
    (19, "3 D8"),
    (18, "D9"),
    (17, "1 D8"),
    (16, "D8"),
    (15, "3 D6"),
    (14, "D7"),
    (13, "1 D6"),
    (12, "D6"),
    (11, "3 D4"),
    (10, "D5"),
    (9, "1 D4"),
    (8, "D4"),
    (7, "1 D3"),
    (6, "D3"),
    (5, "1 D2"),
    (4, "D2"),
    (3, "1 D1"),
    (2, "D1"),
];

/// Returns true if `score` can be finished in one visit on a double.
#[instrument]
pub fn is_valid_checkout(score: u32) -> bool {
    (2..=MAX_CHECKOUT).contains(&score) && !UNREACHABLE_CHECKOUTS.contains(&score)
}

/// Returns the suggested finish for `remaining`, e.g. `"T20 T20 Bull"` for 170.
///
/// Returns `None` outside 2-170 and for the unreachable scores.
#[instrument]
pub fn suggested_checkout(remaining: u32) -> Option<&'static str> {
    CHECKOUT_TABLE
        .binary_search_by(|(score, _)| remaining.cmp(score))
        .ok()
        .map(|index| CHECKOUT_TABLE[index].1)
}
