pub fn add(x: f32, y: f32) -> f32 {
    x + y
}

pub fn subtract(x: f32, y: f32) -> f32 {
    x - y
}

pub fn mul(x: f32, y: f32) -> f32 {
    x * y
}

/// Protected division: any quotient that is not a finite number
/// (division by zero included) collapses to 1.0 so that evaluation
/// stays total.
pub fn div(x: f32, y: f32) -> f32 {
    let quotient = x / y;
    if quotient.is_finite() {
        quotient
    } else {
        1.
    }
}
