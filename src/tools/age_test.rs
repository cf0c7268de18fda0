use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn simple_birthday_already_passed() {
    let a = age(d(1990, 3, 15), d(2024, 6, 20)).unwrap();
    assert_eq!((a.years, a.months, a.days), (34, 3, 5));
    assert_eq!(a.next_birthday_in_days, (d(2025, 3, 15) - d(2024, 6, 20)).num_days());
}

#[test]
fn birthday_later_this_year() {
    let a = age(d(2000, 12, 25), d(2024, 12, 1)).unwrap();
    assert_eq!((a.years, a.months, a.days), (23, 11, 6));
    assert_eq!(a.next_birthday_in_days, 24);
}

#[test]
fn birthday_today() {
    let a = age(d(2000, 5, 10), d(2020, 5, 10)).unwrap();
    assert_eq!((a.years, a.months, a.days), (20, 0, 0));
    assert_eq!(a.next_birthday_in_days, 0);
}

#[test]
fn month_end_birth_clamps_anniversary() {
    let a = age(d(2000, 1, 31), d(2000, 3, 1)).unwrap();
    assert_eq!((a.years, a.months, a.days), (0, 1, 1));
    assert_eq!(a.total_days, 30);
}

#[test]
fn leap_day_birthday_in_common_year() {
    let a = age(d(2004, 2, 29), d(2005, 2, 28)).unwrap();
    assert_eq!((a.years, a.months, a.days), (1, 0, 0));
    assert_eq!(a.next_birthday_in_days, 0);

    let b = age(d(2004, 2, 29), d(2005, 3, 1)).unwrap();
    assert_eq!(b.next_birthday_in_days, (d(2006, 2, 28) - d(2005, 3, 1)).num_days());
}

#[test]
fn same_day_is_zero() {
    let a = age(d(2024, 1, 1), d(2024, 1, 1)).unwrap();
    assert_eq!(a.total_days, 0);
    assert_eq!((a.years, a.months, a.days), (0, 0, 0));
}

#[test]
fn future_birth_is_rejected() {
    assert!(matches!(
        age(d(2030, 1, 1), d(2024, 1, 1)),
        Err(ToolError::InvalidInput(_))
    ));
}
