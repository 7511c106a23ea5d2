//! Read-side views over store snapshots: daily totals, weekly series and
//! the dashboard roll-up.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::metrics::{classify_blood_sugar, goal_progress, SugarAnalysis, SugarStatus};
use crate::models::{
    AppointmentStatus, BloodSugarReading, CalorieEntry, DoctorAppointment, Exercise, Goal,
    GoalCategory, MealType, StepData, UserProfile, DEFAULT_CALORIE_GOAL, DEFAULT_STEP_GOAL,
};
use crate::storage::SlotStore;
use crate::store::WellnessStore;

/// Number of days in a weekly series.
pub const WEEK_DAYS: i64 = 7;

pub fn calorie_goal(profile: Option<&UserProfile>) -> u32 {
    profile.map_or(DEFAULT_CALORIE_GOAL, |p| p.calorie_goal)
}

pub fn step_goal(profile: Option<&UserProfile>) -> u32 {
    profile.map_or(DEFAULT_STEP_GOAL, |p| p.step_goal)
}

/// Total kcal logged on `date`.
pub fn calories_on(entries: &[CalorieEntry], date: NaiveDate) -> u64 {
    entries
        .iter()
        .filter(|e| e.date == date)
        .map(|e| u64::from(e.calories))
        .sum()
}

/// Goal minus consumed; negative once the goal is exceeded.
pub fn calories_remaining(consumed: u64, goal: u32) -> i64 {
    i64::from(goal).saturating_sub(i64::try_from(consumed).unwrap_or(i64::MAX))
}

/// Macronutrient totals in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroTotals {
    pub protein: u64,
    pub carbs: u64,
    pub fat: u64,
}

pub fn macros_on(entries: &[CalorieEntry], date: NaiveDate) -> MacroTotals {
    entries
        .iter()
        .filter(|e| e.date == date)
        .fold(MacroTotals::default(), |acc, e| MacroTotals {
            protein: acc.protein + u64::from(e.protein.unwrap_or(0)),
            carbs: acc.carbs + u64::from(e.carbs.unwrap_or(0)),
            fat: acc.fat + u64::from(e.fat.unwrap_or(0)),
        })
}

/// Calories per meal type for one day, in meal order.
pub fn calories_by_meal(entries: &[CalorieEntry], date: NaiveDate) -> Vec<(MealType, u64)> {
    MealType::ALL
        .into_iter()
        .map(|meal| {
            let total = entries
                .iter()
                .filter(|e| e.date == date && e.meal_type == meal)
                .map(|e| u64::from(e.calories))
                .sum();
            (meal, total)
        })
        .collect()
}

/// Step record for a day. Earlier records win if a slot holds duplicates.
pub fn steps_on(step_data: &[StepData], date: NaiveDate) -> Option<&StepData> {
    step_data.iter().find(|s| s.date == date)
}

/// Steps still needed to reach `goal`, never below zero.
pub fn steps_remaining(steps: u32, goal: u32) -> u32 {
    goal.saturating_sub(steps)
}

/// Exercise minutes and calories for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExerciseTotals {
    pub sessions: usize,
    pub minutes: u64,
    pub calories: u64,
}

pub fn exercise_on(exercises: &[Exercise], date: NaiveDate) -> ExerciseTotals {
    exercises
        .iter()
        .filter(|e| e.date == date)
        .fold(ExerciseTotals::default(), |acc, e| ExerciseTotals {
            sessions: acc.sessions + 1,
            minutes: acc.minutes + u64::from(e.duration),
            calories: acc.calories + u64::from(e.calories_burned),
        })
}

/// One day in a weekly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub calories: u64,
    pub steps: u32,
    pub exercise_minutes: u64,
    pub exercise_calories: u64,
}

/// The seven days ending on `end`, oldest first.
pub fn weekly_series<S: SlotStore>(store: &WellnessStore<S>, end: NaiveDate) -> Vec<DayPoint> {
    (0..WEEK_DAYS)
        .rev()
        .map(|offset| {
            let date = end - Duration::days(offset);
            let exercise = exercise_on(store.exercises(), date);
            DayPoint {
                date,
                calories: calories_on(store.calorie_entries(), date),
                steps: steps_on(store.step_data(), date).map_or(0, |s| s.steps),
                exercise_minutes: exercise.minutes,
                exercise_calories: exercise.calories,
            }
        })
        .collect()
}

/// Most recent reading (last inserted) with its classification.
pub fn latest_reading(
    readings: &[BloodSugarReading],
) -> Option<(&BloodSugarReading, SugarAnalysis)> {
    readings.last().map(|r| (r, classify_blood_sugar(r)))
}

/// The last `n` readings, oldest first.
pub fn recent_readings(readings: &[BloodSugarReading], n: usize) -> &[BloodSugarReading] {
    &readings[readings.len().saturating_sub(n)..]
}

/// Headline figures for the blood sugar history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SugarStats {
    /// Rounded mean of the last seven readings, 0 when there are none
    pub average_7: u32,
    pub total: usize,
    /// Rounded share of all readings that classify as normal
    pub in_range_pct: u32,
}

/// Readings that feed the rolling average.
pub const SUGAR_AVERAGE_WINDOW: usize = 7;

pub fn sugar_stats(readings: &[BloodSugarReading]) -> SugarStats {
    if readings.is_empty() {
        return SugarStats::default();
    }

    let window = recent_readings(readings, SUGAR_AVERAGE_WINDOW);
    let sum: u64 = window.iter().map(|r| u64::from(r.value)).sum();
    let average_7 = (sum as f64 / window.len() as f64).round() as u32;

    let normal = readings
        .iter()
        .filter(|r| classify_blood_sugar(r).status == SugarStatus::Normal)
        .count();
    let in_range_pct = (normal as f64 / readings.len() as f64 * 100.0).round() as u32;

    SugarStats {
        average_7,
        total: readings.len(),
        in_range_pct,
    }
}

/// Goal count and rounded mean progress for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: GoalCategory,
    pub goals: usize,
    pub average_progress: u32,
}

pub fn goal_overview(goals: &[Goal]) -> Vec<CategoryProgress> {
    GoalCategory::ALL
        .into_iter()
        .map(|category| {
            let progress: Vec<u32> = goals
                .iter()
                .filter(|g| g.category == category)
                .map(|g| u32::from(g.progress))
                .collect();
            let average_progress = if progress.is_empty() {
                0
            } else {
                let sum: u32 = progress.iter().sum();
                (f64::from(sum) / progress.len() as f64).round() as u32
            };
            CategoryProgress {
                category,
                goals: progress.len(),
                average_progress,
            }
        })
        .collect()
}

pub fn appointments_with_status(
    appointments: &[DoctorAppointment],
    status: AppointmentStatus,
) -> Vec<&DoctorAppointment> {
    appointments.iter().filter(|a| a.status == status).collect()
}

/// Everything the dashboard shows for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub profile_name: Option<String>,
    pub calories: u64,
    pub calorie_goal: u32,
    pub calories_remaining: i64,
    pub steps: u32,
    pub step_goal: u32,
    pub step_progress: u32,
    pub steps_remaining: u32,
    pub distance_km: f64,
    pub exercise: ExerciseTotals,
    pub latest_sugar: Option<u32>,
    pub latest_sugar_status: Option<SugarAnalysis>,
    pub upcoming_appointments: usize,
}

impl DashboardSummary {
    pub fn build<S: SlotStore>(store: &WellnessStore<S>, date: NaiveDate) -> Self {
        let profile = store.user_profile();
        let calories = calories_on(store.calorie_entries(), date);
        let calorie_goal = calorie_goal(profile);
        let step_goal = step_goal(profile);
        let today_steps = steps_on(store.step_data(), date);
        let steps = today_steps.map_or(0, |s| s.steps);
        let latest = latest_reading(store.blood_sugar_readings());

        Self {
            date,
            profile_name: profile.map(|p| p.name.clone()),
            calories,
            calorie_goal,
            calories_remaining: calories_remaining(calories, calorie_goal),
            steps,
            step_goal,
            step_progress: goal_progress(steps, step_goal),
            steps_remaining: steps_remaining(steps, step_goal),
            distance_km: today_steps.map_or(0.0, |s| s.distance),
            exercise: exercise_on(store.exercises(), date),
            latest_sugar: latest.as_ref().map(|(r, _)| r.value),
            latest_sugar_status: latest.map(|(_, analysis)| analysis),
            upcoming_appointments: appointments_with_status(
                store.appointments(),
                AppointmentStatus::Scheduled,
            )
            .len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseType, Gender, MealContext};
    use crate::storage::MemorySlotStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn entry(date: NaiveDate, meal: MealType, kcal: u32) -> CalorieEntry {
        CalorieEntry::new(date, meal, "food", kcal)
    }

    #[test]
    fn test_calories_on_filters_by_day() {
        let entries = vec![
            entry(day(1), MealType::Breakfast, 300),
            entry(day(1), MealType::Dinner, 700),
            entry(day(2), MealType::Lunch, 500),
        ];
        assert_eq!(calories_on(&entries, day(1)), 1000);
        assert_eq!(calories_on(&entries, day(3)), 0);
    }

    #[test]
    fn test_calories_by_meal_lists_every_meal_type() {
        let entries = vec![
            entry(day(1), MealType::Snack, 120),
            entry(day(1), MealType::Snack, 80),
            entry(day(1), MealType::Lunch, 450),
        ];
        let by_meal = calories_by_meal(&entries, day(1));
        assert_eq!(
            by_meal,
            vec![
                (MealType::Breakfast, 0),
                (MealType::Lunch, 450),
                (MealType::Dinner, 0),
                (MealType::Snack, 200),
            ]
        );
    }

    #[test]
    fn test_macros_on_skips_missing_values() {
        let entries = vec![
            entry(day(1), MealType::Lunch, 400).with_macros(Some(20), Some(50), None),
            entry(day(1), MealType::Dinner, 600).with_macros(Some(35), None, Some(22)),
        ];
        assert_eq!(
            macros_on(&entries, day(1)),
            MacroTotals {
                protein: 55,
                carbs: 50,
                fat: 22
            }
        );
    }

    #[test]
    fn test_goals_default_without_profile() {
        assert_eq!(calorie_goal(None), 2000);
        assert_eq!(step_goal(None), 10_000);
    }

    #[test]
    fn test_recent_readings_takes_tail() {
        let readings: Vec<BloodSugarReading> = (0..12)
            .map(|i| BloodSugarReading::new(day(1), "08:00:00", 90 + i, MealContext::Fasting))
            .collect();
        let recent = recent_readings(&readings, 10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].value, 92);
        assert_eq!(recent_readings(&readings[..3], 10).len(), 3);
    }

    #[test]
    fn test_goal_overview_averages_per_category() {
        let mut a = Goal::new("a", "", day(30), GoalCategory::Fitness);
        a.progress = 30;
        let mut b = Goal::new("b", "", day(30), GoalCategory::Fitness);
        b.progress = 45;
        let c = Goal::new("c", "", day(30), GoalCategory::Health);

        let overview = goal_overview(&[a, b, c]);
        let fitness = overview
            .iter()
            .find(|p| p.category == GoalCategory::Fitness)
            .unwrap();
        assert_eq!(fitness.goals, 2);
        assert_eq!(fitness.average_progress, 38);

        let weight = overview
            .iter()
            .find(|p| p.category == GoalCategory::Weight)
            .unwrap();
        assert_eq!(weight.goals, 0);
        assert_eq!(weight.average_progress, 0);
    }

    #[test]
    fn test_weekly_series_covers_seven_days_oldest_first() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store.add_calorie_entry(entry(day(10), MealType::Lunch, 900)).unwrap();
        store.add_calorie_entry(entry(day(4), MealType::Lunch, 500)).unwrap();
        store.add_step_data(StepData::from_steps(day(7), 8_000, None)).unwrap();
        store
            .add_exercise(Exercise::new("Yoga", ExerciseType::Flexibility, 45, 150, day(10)))
            .unwrap();

        let series = weekly_series(&store, day(10));
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, day(4));
        assert_eq!(series[0].calories, 500);
        assert_eq!(series[3].steps, 8_000);
        assert_eq!(series[6].calories, 900);
        assert_eq!(series[6].exercise_minutes, 45);
    }

    #[test]
    fn test_daily_totals_do_not_overflow() {
        let big = u32::MAX / 2 + 1;
        let entries = vec![
            entry(day(1), MealType::Lunch, big).with_macros(Some(big), None, None),
            entry(day(1), MealType::Lunch, big).with_macros(Some(big), None, None),
        ];
        let expected = u64::from(u32::MAX) + 1;

        assert_eq!(calories_on(&entries, day(1)), expected);
        assert_eq!(macros_on(&entries, day(1)).protein, expected);
        assert_eq!(calories_by_meal(&entries, day(1))[1], (MealType::Lunch, expected));
        assert_eq!(calories_remaining(expected, 2000), 2000 - expected as i64);

        let exercises = vec![
            Exercise::new("a", ExerciseType::Cardio, big, big, day(1)),
            Exercise::new("b", ExerciseType::Cardio, big, big, day(1)),
        ];
        let totals = exercise_on(&exercises, day(1));
        assert_eq!(totals.minutes, expected);
        assert_eq!(totals.calories, expected);
    }

    #[test]
    fn test_steps_remaining_floors_at_zero() {
        assert_eq!(steps_remaining(6_500, 10_000), 3_500);
        assert_eq!(steps_remaining(12_000, 10_000), 0);
    }

    fn reading(value: u32) -> BloodSugarReading {
        BloodSugarReading::new(day(1), "08:00:00", value, MealContext::Fasting)
    }

    #[test]
    fn test_sugar_stats_empty() {
        assert_eq!(sugar_stats(&[]), SugarStats::default());
    }

    #[test]
    fn test_sugar_stats_fewer_than_window() {
        // 95 normal, 110 prediabetes, 90 normal
        let readings = vec![reading(95), reading(110), reading(90)];
        let stats = sugar_stats(&readings);
        assert_eq!(stats.average_7, 98);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_range_pct, 67);
    }

    #[test]
    fn test_sugar_stats_exactly_window() {
        let readings: Vec<BloodSugarReading> =
            [80, 85, 90, 95, 100, 130, 200].into_iter().map(reading).collect();
        let stats = sugar_stats(&readings);
        assert_eq!(stats.average_7, 111);
        assert_eq!(stats.total, 7);
        assert_eq!(stats.in_range_pct, 71);
    }

    #[test]
    fn test_sugar_stats_average_uses_last_seven_only() {
        let mut readings = vec![reading(300), reading(300)];
        readings.extend([90; 7].into_iter().map(reading));
        let stats = sugar_stats(&readings);
        assert_eq!(stats.average_7, 90);
        assert_eq!(stats.total, 9);
        assert_eq!(stats.in_range_pct, 78);
    }

    #[test]
    fn test_dashboard_summary() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store
            .set_user_profile(
                UserProfile::new("Rae", 29, 70.0, 175.0, Gender::Other).with_goals(1800, 8000),
            )
            .unwrap();
        store.add_calorie_entry(entry(day(5), MealType::Breakfast, 450)).unwrap();
        store.add_calorie_entry(entry(day(5), MealType::Lunch, 1500)).unwrap();
        store.add_step_data(StepData::from_steps(day(5), 6_000, None)).unwrap();
        store
            .add_blood_sugar_reading(BloodSugarReading::new(
                day(5),
                "07:00:00",
                118,
                MealContext::Fasting,
            ))
            .unwrap();
        store
            .add_appointment(DoctorAppointment::scheduled("Dr. Ng", "Nutritionist", day(9), "11:00"))
            .unwrap();

        let summary = DashboardSummary::build(&store, day(5));
        assert_eq!(summary.profile_name.as_deref(), Some("Rae"));
        assert_eq!(summary.calories, 1950);
        assert_eq!(summary.calories_remaining, -150);
        assert_eq!(summary.step_progress, 75);
        assert_eq!(summary.steps_remaining, 2_000);
        assert_eq!(summary.latest_sugar, Some(118));
        assert_eq!(
            summary.latest_sugar_status.map(|a| a.status),
            Some(SugarStatus::Prediabetes)
        );
        assert_eq!(summary.upcoming_appointments, 1);
    }

    #[test]
    fn test_dashboard_summary_empty_store() {
        let slots = MemorySlotStore::new();
        let store = WellnessStore::hydrate(&slots);
        let summary = DashboardSummary::build(&store, day(5));
        assert!(summary.profile_name.is_none());
        assert_eq!(summary.calories_remaining, 2000);
        assert_eq!(summary.steps, 0);
        assert!(summary.latest_sugar.is_none());
    }
}
