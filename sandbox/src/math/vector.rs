pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, scalar: f32) -> Self;
    fn midpoint(self, other: Self) -> Self;
    fn distance(self, other: Self) -> f32;
    fn angle_to(self, other: Self) -> f32;
    fn length(self) -> f32;
    fn rotate(self, angle: f32) -> Self;
}

impl VectorMath for [f32; 2] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1]]
    }

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        [self[0] * scalar, self[1] * scalar]
    }

    #[inline]
    fn midpoint(self, other: Self) -> Self {
        self.add(other).mul(0.5)
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    /// Angle of the segment from `self` to `other`, radians counter-clockwise from +x.
    #[inline]
    fn angle_to(self, other: Self) -> f32 {
        let [dx, dy] = other.sub(self);
        dy.atan2(dx)
    }

    #[inline]
    fn length(self) -> f32 {
        (self[0] * self[0] + self[1] * self[1]).sqrt()
    }

    #[inline]
    fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        [
            self[0] * cos - self[1] * sin,
            self[0] * sin + self[1] * cos,
        ]
    }
}
