/// Row-major 2D buffer. Dimensions are fixed at construction.
#[derive(Clone, Debug)]
pub struct Vec2D<T> {
    buffer: Vec<T>,
    width: usize,
    height: usize,
}

/// Packed ARGB pixels, as handed to the presentation layer.
pub type PixelBuffer = Vec2D<u32>;

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Writes `value` at (x, y). Writes outside the buffer are dropped.
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        if !self.in_bounds(x, y) {
            return;
        }
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_at_row_major() {
        let mut film = PixelBuffer::new(4, 3, 0);
        film.write_at(1, 2, 7);
        assert_eq!(film.at(1, 2), 7);
        assert_eq!(film.buffer[2 * 4 + 1], 7);
        assert_eq!(film.buffer.iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_write_out_of_bounds_discarded() {
        let mut film = PixelBuffer::new(4, 3, 0);
        film.write_at(4, 0, 1);
        film.write_at(0, 3, 1);
        film.write_at(4, 3, 1);
        film.write_at(usize::MAX, 0, 1);
        assert!(film.buffer.iter().all(|&p| p == 0));
        assert_eq!(film.total_pixels(), 12);
    }

    #[test]
    fn test_dimensions_match_storage() {
        let film = PixelBuffer::new(5, 7, 0);
        assert_eq!((film.width(), film.height()), (5, 7));
        assert_eq!(film.as_slice().len(), film.total_pixels());
        let copy = film.clone();
        assert_eq!((copy.width(), copy.height()), (5, 7));
        assert_eq!(copy.as_slice().len(), 35);
    }

    #[test]
    fn test_last_pixel_writable() {
        let mut film = PixelBuffer::new(4, 3, 0);
        film.write_at(3, 2, 9);
        assert_eq!(film.as_slice()[11], 9);
    }
}
