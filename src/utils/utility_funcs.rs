pub fn get_argmin(vals: &Vec<f32>) -> usize {
    vals.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
        .unwrap()
}

pub fn get_min(vals: &Vec<f32>) -> f32 {
    *vals.iter()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap()
}

pub fn float_loop(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(start), move |previous| {
        let next = previous + step;
        if next < end {
            Some(next)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn argmin_and_min() {
        let vals = vec![3., 0.5, 2., 0.5];
        assert_eq!(get_argmin(&vals), 1);
        assert_float_eq!(get_min(&vals), 0.5, abs <= 0.0);
    }

    #[test]
    fn float_loop_covers_the_half_open_range() {
        let xs: Vec<f32> = float_loop(1., 4., 1.).collect();
        assert_eq!(xs.len(), 3);
        assert_float_eq!(xs[0], 1., abs <= 0.0);
        assert_float_eq!(xs[2], 3., abs <= 0.0);
    }
}
