/// Size-2 tournament: the candidate with strictly lower fitness wins,
/// ties go to the first candidate.
pub fn tournament(fitness_vals: &[f32], first: usize, second: usize) -> usize {
    if fitness_vals[second] < fitness_vals[first] {
        second
    } else {
        first
    }
}
