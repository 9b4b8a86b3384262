/// Tailwind gradient tokens the card UI cycles through.
pub const COLOR_PALETTE: [&str; 8] = [
    "from-blue-500 to-blue-600",
    "from-purple-500 to-purple-600",
    "from-green-500 to-green-600",
    "from-orange-500 to-orange-600",
    "from-indigo-500 to-indigo-600",
    "from-red-500 to-red-600",
    "from-pink-500 to-pink-600",
    "from-teal-500 to-teal-600",
];

/// Display color for the entry at `index`. Purely positional: the same
/// index always gets the same color, regardless of the entry's content.
pub fn color_for(index: usize) -> &'static str {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}
