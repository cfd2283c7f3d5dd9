use crate::PaletteError;

/**
Stretches or shrinks a sequence to exactly `n` elements.

- When `items` has at least `n` elements, picks `n` evenly spaced elements, always keeping the first and (for `n >= 2`) the last. Interior picks use the nearest index, rounding ties upward.
- When `items` is shorter, repeats it cyclically from the start.

Elements are only ever copied, never blended. `n == 0` yields an empty vector for any input; an empty input with `n > 0` is an error.

```rust
use palette_gallery::resize;

assert_eq!(resize(&["a", "b", "c", "d"], 2).unwrap(), ["a", "d"]);
assert_eq!(resize(&["a", "b"], 5).unwrap(), ["a", "b", "a", "b", "a"]);
```
*/
pub fn resize<T: Clone>(items: &[T], n: usize) -> Result<Vec<T>, PaletteError> {
	if n == 0 {
		return Ok(Vec::new());
	}

	let len = items.len();
	if len == 0 {
		return Err(PaletteError::EmptyInput);
	}

	tracing::trace!(from = len, to = n, "resizing color sequence");

	if len < n {
		return Ok(items.iter().cycle().take(n).cloned().collect());
	}

	let mut result = Vec::with_capacity(n);
	result.push(items[0].clone());

	if n == 1 {
		return Ok(result);
	}

	let step = (len - 1) as f64 / (n - 1) as f64;
	for i in 1..n - 1 {
		// Non-negative, so `round` (half away from zero) rounds ties upward.
		let index = (i as f64 * step).round() as usize;
		result.push(items[index.min(len - 1)].clone());
	}

	result.push(items[len - 1].clone());
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_downsample_keeps_endpoints() {
		let colors = ["#AAA", "#BBB", "#CCC", "#DDD"];
		assert_eq!(resize(&colors, 2).unwrap(), ["#AAA", "#DDD"]);
	}

	#[test]
	fn test_downsample_to_one_keeps_first() {
		let colors = ["#AAA", "#BBB", "#CCC"];
		assert_eq!(resize(&colors, 1).unwrap(), ["#AAA"]);
	}

	#[test]
	fn test_downsample_ties_round_up() {
		// step = 1.5, index 1 lands on 1.5
		let four = ["a", "b", "c", "d"];
		assert_eq!(resize(&four, 3).unwrap(), ["a", "c", "d"]);

		// step = 2.5, index 1 lands on 2.5
		let six = ["a", "b", "c", "d", "e", "f"];
		assert_eq!(resize(&six, 3).unwrap(), ["a", "d", "f"]);
	}

	#[test]
	fn test_downsample_interior_picks() {
		let eight: Vec<u32> = (0..8).collect();
		// step = 7 / 4 = 1.75 -> 1.75, 3.5, 5.25
		assert_eq!(resize(&eight, 5).unwrap(), [0, 2, 4, 5, 7]);

		let sixteen: Vec<u32> = (0..16).collect();
		// step = 15 / 4 = 3.75 -> 3.75, 7.5, 11.25
		assert_eq!(resize(&sixteen, 5).unwrap(), [0, 4, 8, 11, 15]);
	}

	#[test]
	fn test_equal_length_is_identity() {
		let colors = ["#AAA", "#BBB", "#CCC", "#DDD", "#EEE"];
		assert_eq!(resize(&colors, 5).unwrap(), colors);
	}

	#[test]
	fn test_upsample_repeats_cyclically() {
		let colors = ["#AAA", "#BBB"];
		assert_eq!(
			resize(&colors, 5).unwrap(),
			["#AAA", "#BBB", "#AAA", "#BBB", "#AAA"]
		);

		assert_eq!(resize(&["#AAA"], 3).unwrap(), ["#AAA", "#AAA", "#AAA"]);
	}

	#[test]
	fn test_zero_length_target() {
		assert!(resize(&["#AAA", "#BBB"], 0).unwrap().is_empty());

		let empty: [&str; 0] = [];
		assert!(resize(&empty, 0).unwrap().is_empty());
	}

	#[test]
	fn test_empty_input_is_rejected() {
		let empty: [&str; 0] = [];
		let err = resize(&empty, 3).unwrap_err();
		assert!(matches!(err, PaletteError::EmptyInput));
		assert!(err.is_invalid_argument());
	}

	proptest! {
		#[test]
		fn prop_length_is_exact(items in prop::collection::vec(any::<u8>(), 1..40), n in 0usize..80) {
			prop_assert_eq!(resize(&items, n).unwrap().len(), n);
		}

		#[test]
		fn prop_downsample_preserves_endpoints(items in prop::collection::vec(any::<u16>(), 2..40), n in 2usize..40) {
			prop_assume!(items.len() >= n);
			let resized = resize(&items, n).unwrap();
			prop_assert_eq!(resized[0], items[0]);
			prop_assert_eq!(resized[n - 1], items[items.len() - 1]);
		}

		#[test]
		fn prop_downsample_indices_are_monotonic(len in 1usize..60, n in 1usize..60) {
			prop_assume!(len >= n);
			let items: Vec<usize> = (0..len).collect();
			let resized = resize(&items, n).unwrap();
			prop_assert!(resized.windows(2).all(|w| w[0] <= w[1]));
		}

		#[test]
		fn prop_upsample_is_cyclic(items in prop::collection::vec(any::<u8>(), 1..20), extra in 1usize..40) {
			let n = items.len() + extra;
			let resized = resize(&items, n).unwrap();
			for (i, item) in resized.iter().enumerate() {
				prop_assert_eq!(*item, items[i % items.len()]);
			}
		}
	}
}
