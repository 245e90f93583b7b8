use crate::quality::QualityValue;

/// Priorities closer than this are considered equal.
const PRIORITY_TOLERANCE: f64 = 0.001;

/// Sorts `values` from most to least preferred.
///
/// Higher priority comes first. Priorities within [`PRIORITY_TOLERANCE`] of each other tie, and
/// ties are broken by [`Specificity`](crate::Specificity), most specific first. Entries that
/// still tie keep their relative order.
pub fn sort_quality_values(values: &mut [QualityValue]) {
  let len = values.len();
  if len < 2 {
    return;
  }

  // `precedes` is not transitive across the tolerance, so `sort_by` cannot be used. A bottom-up
  // merge over indices only asks whether a right entry precedes a left one.
  let mut order = (0..len).collect::<Vec<_>>();
  let mut merged = vec![0; len];
  let mut width = 1;
  while width < len {
    for start in (0..len).step_by(2 * width) {
      let mid = (start + width).min(len);
      let end = (start + 2 * width).min(len);
      merge(values, &order[start..mid], &order[mid..end], &mut merged[start..end]);
    }
    std::mem::swap(&mut order, &mut merged);
    width *= 2;
  }

  let sorted = order.iter().map(|&index| values[index].clone()).collect::<Vec<_>>();
  values.clone_from_slice(&sorted);
}

fn merge(values: &[QualityValue], left: &[usize], right: &[usize], out: &mut [usize]) {
  let (mut l, mut r) = (0, 0);
  for slot in out.iter_mut() {
    let take_right =
      l == left.len() || (r < right.len() && precedes(&values[right[r]], &values[left[l]]));
    if take_right {
      *slot = right[r];
      r += 1;
    } else {
      *slot = left[l];
      l += 1;
    }
  }
}

fn precedes(a: &QualityValue, b: &QualityValue) -> bool {
  let delta = a.priority - b.priority;
  if delta >= PRIORITY_TOLERANCE {
    return true;
  }
  if -delta >= PRIORITY_TOLERANCE {
    return false;
  }

  a.specificity() > b.specificity()
}

#[cfg(test)]
mod tests {
  use std::time::Duration;
  use std::time::Instant;

  use proptest::prelude::*;
  use rstest::rstest;

  use crate::quality::QualityValue;
  use crate::quality::sort::precedes;
  use crate::quality::sort::sort_quality_values;

  fn values(entries: &[(&str, f64)]) -> Vec<QualityValue> {
    entries.iter().map(|(mime_type, priority)| QualityValue::new(*mime_type, *priority)).collect()
  }

  #[rstest]
  #[case::empty(&[], &[])]
  #[case::single(&[("text/html", 1.0)], &[("text/html", 1.0)])]
  #[case::sorted_pair(
    &[("text/type1", 1.0), ("text/type2", 0.0)],
    &[("text/type1", 1.0), ("text/type2", 0.0)]
  )]
  #[case::reversed_pair(
    &[("text/type2", 0.0), ("text/type1", 1.0)],
    &[("text/type1", 1.0), ("text/type2", 0.0)]
  )]
  #[case::three(
    &[("type2", 0.0), ("type1", 0.5), ("type3", 1.0)],
    &[("type3", 1.0), ("type1", 0.5), ("type2", 0.0)]
  )]
  #[case::five(
    &[
      ("text/type1", 1.0),
      ("text/type2", 0.2),
      ("text/type3", 0.8),
      ("text/type4", 0.0),
      ("text/type5", 0.3),
    ],
    &[
      ("text/type1", 1.0),
      ("text/type3", 0.8),
      ("text/type5", 0.3),
      ("text/type2", 0.2),
      ("text/type4", 0.0),
    ]
  )]
  #[case::stable_pair(
    &[("text/type2", 1.0), ("text/type1", 1.0)],
    &[("text/type2", 1.0), ("text/type1", 1.0)]
  )]
  #[case::stable_three(
    &[("text/type3", 1.0), ("text/type2", 1.0), ("text/type1", 1.0)],
    &[("text/type3", 1.0), ("text/type2", 1.0), ("text/type1", 1.0)]
  )]
  #[case::exact_over_subtype(
    &[("text/*", 1.0), ("text/type2", 1.0)],
    &[("text/type2", 1.0), ("text/*", 1.0)]
  )]
  #[case::stable_subtypes(
    &[("text1/*", 1.0), ("text2/*", 1.0)],
    &[("text1/*", 1.0), ("text2/*", 1.0)]
  )]
  #[case::exact_over_any(
    &[("*/*", 1.0), ("text/type2", 1.0)],
    &[("text/type2", 1.0), ("*/*", 1.0)]
  )]
  #[case::subtype_over_any(&[("*/*", 1.0), ("text/*", 1.0)], &[("text/*", 1.0), ("*/*", 1.0)])]
  #[case::priority_over_specificity(
    &[("*/*", 0.9), ("text/html", 0.8)],
    &[("*/*", 0.9), ("text/html", 0.8)]
  )]
  #[case::within_tolerance(
    &[("*/*", 0.9), ("text/html", 0.8995)],
    &[("text/html", 0.8995), ("*/*", 0.9)]
  )]
  #[case::at_tolerance(
    &[("text/html", 0.899), ("*/*", 0.9)],
    &[("*/*", 0.9), ("text/html", 0.899)]
  )]
  fn test_sort_quality_values(#[case] input: &[(&str, f64)], #[case] expected: &[(&str, f64)]) {
    let mut input = values(input);
    sort_quality_values(&mut input);
    assert_eq!(input, values(expected));
  }

  #[test]
  fn test_sort_large_ascending_list() {
    let count: u32 = 30_000;
    let mut list = (0..count)
      .map(|i| QualityValue::new(format!("text/t{i}"), f64::from(i * 10 / count) / 10.0))
      .collect::<Vec<_>>();

    let started = Instant::now();
    sort_quality_values(&mut list);

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(list.first().map(QualityValue::mime_type), Some("text/t27000"));
    assert_eq!(list.last().map(QualityValue::mime_type), Some("text/t2999"));
    for pair in list.windows(2) {
      assert!(!precedes(&pair[1], &pair[0]));
    }
  }

  #[test]
  fn test_precedes() {
    let html = QualityValue::new("text/html", 1.0);
    let any = QualityValue::new("*/*", 1.0);
    assert!(precedes(&html, &any));
    assert!(!precedes(&any, &html));
    assert!(!precedes(&html, &html));
  }

  fn quality_value(scale: u32) -> impl Strategy<Value = QualityValue> {
    (prop::sample::select(vec!["*/*", "text/*", "text/html", "image/*", "image/png"]), 0..=scale)
      .prop_map(move |(mime_type, step)| {
        QualityValue::new(mime_type, f64::from(step) / f64::from(scale))
      })
  }

  proptest! {
    #[test]
    fn test_sort_is_idempotent(mut list in prop::collection::vec(quality_value(10), 0..24)) {
      sort_quality_values(&mut list);
      let sorted = list.clone();
      sort_quality_values(&mut list);
      prop_assert_eq!(list, sorted);
    }

    #[test]
    fn test_sort_orders_adjacent_entries(
      mut list in prop::collection::vec(quality_value(1000), 0..64)
    ) {
      sort_quality_values(&mut list);
      for pair in list.windows(2) {
        prop_assert!(!precedes(&pair[1], &pair[0]));
      }
    }
  }
}
