//! Static NYSE holiday and early-close tables.
//!
//! Literal observed dates, not computed rules. The tables cover 2021–2026;
//! dates outside that window are treated as normal trading days with standard
//! hours, so results degrade gracefully rather than failing.
//!
//! One quirk is carried in the 2021 data: Thanksgiving (2021-11-25) appears
//! as a 13:00 early close rather than a full closure, so the engine treats
//! that morning as a regular half session.

use crate::date::CalendarDate;
use chrono_tz::Tz;

/// The NYSE's local timezone (DST-aware wall-clock rules).
pub const NYSE_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Full-closure days, 2021–2026.
pub const NYSE_HOLIDAYS: &[CalendarDate] = &[
    // ── 2021 ─────────────────────────────────────────────────────────────
    CalendarDate::new(2021, 1, 1),   // New Year's Day
    CalendarDate::new(2021, 1, 18),  // MLK Day
    CalendarDate::new(2021, 2, 15),  // Presidents' Day
    CalendarDate::new(2021, 4, 2),   // Good Friday
    CalendarDate::new(2021, 5, 31),  // Memorial Day
    CalendarDate::new(2021, 7, 5),   // Independence Day (observed — July 4 on Sunday)
    CalendarDate::new(2021, 9, 6),   // Labor Day
    // Thanksgiving 2021 (Nov 25) is listed as an early close below
    CalendarDate::new(2021, 12, 24), // Christmas (observed — Dec 25 on Saturday)
    // ── 2022 ─────────────────────────────────────────────────────────────
    // New Year's Day fell on a Saturday and was not observed
    CalendarDate::new(2022, 1, 17),  // MLK Day
    CalendarDate::new(2022, 2, 21),  // Presidents' Day
    CalendarDate::new(2022, 4, 15),  // Good Friday
    CalendarDate::new(2022, 5, 30),  // Memorial Day
    CalendarDate::new(2022, 6, 20),  // Juneteenth (observed — June 19 on Sunday)
    CalendarDate::new(2022, 7, 4),   // Independence Day
    CalendarDate::new(2022, 9, 5),   // Labor Day
    CalendarDate::new(2022, 11, 24), // Thanksgiving
    CalendarDate::new(2022, 12, 26), // Christmas (observed — Dec 25 on Sunday)
    // ── 2023 ─────────────────────────────────────────────────────────────
    CalendarDate::new(2023, 1, 2),   // New Year's Day (observed — Jan 1 on Sunday)
    CalendarDate::new(2023, 1, 16),  // MLK Day
    CalendarDate::new(2023, 2, 20),  // Presidents' Day
    CalendarDate::new(2023, 4, 7),   // Good Friday
    CalendarDate::new(2023, 5, 29),  // Memorial Day
    CalendarDate::new(2023, 6, 19),  // Juneteenth
    CalendarDate::new(2023, 7, 4),   // Independence Day
    CalendarDate::new(2023, 9, 4),   // Labor Day
    CalendarDate::new(2023, 11, 23), // Thanksgiving
    CalendarDate::new(2023, 12, 25), // Christmas
    // ── 2024 ─────────────────────────────────────────────────────────────
    CalendarDate::new(2024, 1, 1),   // New Year's Day
    CalendarDate::new(2024, 1, 15),  // MLK Day
    CalendarDate::new(2024, 2, 19),  // Presidents' Day
    CalendarDate::new(2024, 3, 29),  // Good Friday
    CalendarDate::new(2024, 5, 27),  // Memorial Day
    CalendarDate::new(2024, 6, 19),  // Juneteenth
    CalendarDate::new(2024, 7, 4),   // Independence Day
    CalendarDate::new(2024, 9, 2),   // Labor Day
    CalendarDate::new(2024, 11, 28), // Thanksgiving
    CalendarDate::new(2024, 12, 25), // Christmas
    // ── 2025 ─────────────────────────────────────────────────────────────
    CalendarDate::new(2025, 1, 1),   // New Year's Day
    CalendarDate::new(2025, 1, 9),   // National Day of Mourning (President Carter)
    CalendarDate::new(2025, 1, 20),  // MLK Day
    CalendarDate::new(2025, 2, 17),  // Presidents' Day
    CalendarDate::new(2025, 4, 18),  // Good Friday
    CalendarDate::new(2025, 5, 26),  // Memorial Day
    CalendarDate::new(2025, 6, 19),  // Juneteenth
    CalendarDate::new(2025, 7, 4),   // Independence Day
    CalendarDate::new(2025, 9, 1),   // Labor Day
    CalendarDate::new(2025, 11, 27), // Thanksgiving
    CalendarDate::new(2025, 12, 25), // Christmas
    // ── 2026 ─────────────────────────────────────────────────────────────
    CalendarDate::new(2026, 1, 1),   // New Year's Day
    CalendarDate::new(2026, 1, 19),  // MLK Day
    CalendarDate::new(2026, 2, 16),  // Presidents' Day
    CalendarDate::new(2026, 4, 3),   // Good Friday
    CalendarDate::new(2026, 5, 25),  // Memorial Day
    CalendarDate::new(2026, 6, 19),  // Juneteenth
    CalendarDate::new(2026, 7, 3),   // Independence Day (observed — July 4 on Saturday)
    CalendarDate::new(2026, 9, 7),   // Labor Day
    CalendarDate::new(2026, 11, 26), // Thanksgiving
    CalendarDate::new(2026, 12, 25), // Christmas
];

/// Days on which the session closes at 13:00 instead of 16:00, 2021–2026.
pub const NYSE_EARLY_CLOSES: &[CalendarDate] = &[
    CalendarDate::new(2021, 11, 25), // Thanksgiving (carried as a half session)
    CalendarDate::new(2021, 11, 26), // day after Thanksgiving
    CalendarDate::new(2022, 11, 25), // day after Thanksgiving
    CalendarDate::new(2023, 7, 3),   // day before Independence Day
    CalendarDate::new(2023, 11, 24), // day after Thanksgiving
    CalendarDate::new(2024, 7, 3),   // day before Independence Day
    CalendarDate::new(2024, 11, 29), // day after Thanksgiving
    CalendarDate::new(2024, 12, 24), // Christmas Eve
    CalendarDate::new(2025, 7, 3),   // day before Independence Day
    CalendarDate::new(2025, 11, 28), // day after Thanksgiving
    CalendarDate::new(2025, 12, 24), // Christmas Eve
    CalendarDate::new(2026, 11, 27), // day after Thanksgiving
    CalendarDate::new(2026, 12, 24), // Christmas Eve
];
