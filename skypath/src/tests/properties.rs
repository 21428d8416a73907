#[cfg(test)]
mod properties {
    use crate::prelude::*;
    use rand::Rng;
    #[test]
    fn sampler_length_and_spacing() {
        let mut rng = rand::thread_rng();
        let t0 = Epoch::from_gregorian_utc_at_midnight(2020, 1, 1);
        for _ in 0..200 {
            let span_days = rng.gen_range(1..2000) as f64;
            let step_days = rng.gen_range(1..100) as f64 * 0.25;
            let t1 = t0 + Duration::from_days(span_days);

            let sampler = TimeSampler::new(t0, t1, step_days).unwrap();
            let expected = (span_days / step_days).ceil() as usize;
            assert_eq!(
                sampler.len(),
                expected,
                "span={} step={}",
                span_days,
                step_days
            );

            let points: Vec<TimePoint> = sampler.iter().collect();
            assert_eq!(points.len(), expected);
            assert_eq!(points[0].epoch, t0);
            assert!(points.iter().all(|t| t.epoch < t1));
            for pair in points.windows(2) {
                let dt = pair[1].epoch - pair[0].epoch;
                assert_eq!(dt, sampler.step());
                assert!((pair[1].jd - pair[0].jd - step_days).abs() < 1.0E-8);
            }
        }
    }
    #[test]
    fn wrap_range_and_idempotency() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let ra_hours = rng.gen_range(-1.0E4..1.0E4);
            let wrapped = wrap_degrees(hours_to_degrees(ra_hours));
            assert!(
                (0.0..360.0).contains(&wrapped),
                "wrap({}) = {}",
                ra_hours,
                wrapped
            );
            assert_eq!(wrap_degrees(wrapped), wrapped);
        }
    }
    #[test]
    fn no_wrap_within_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let ra_hours = rng.gen_range(0.0..23.99);
            let ra_deg = hours_to_degrees(ra_hours);
            assert_eq!(wrap_degrees(ra_deg), ra_deg);
        }
    }
    #[test]
    fn annotations_within_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let n = rng.gen_range(0..10_000);
            let indices = annotation_indices(n);
            if n > 0 {
                assert_eq!(indices[0], 0);
                assert!(*indices.last().unwrap() < n);
            } else {
                assert!(indices.is_empty());
            }
        }
    }
}
