/// Built-in color names for `randtxt color`.
pub const COLORS: &[&str] = &[
    "amber", "amethyst", "aqua", "aquamarine", "auburn", "aureolin", "azure", "beige", "black",
    "blue", "bronze", "brown", "burgundy", "celadon", "cerise", "cerulean", "charcoal",
    "chartreuse", "cinereous", "cinnabar", "citrine", "cobalt", "copper", "coquelicot", "coral",
    "cordovan", "cornflower", "cornsilk", "cream", "crimson", "cyan", "daffodil", "dandelion",
    "denim", "ecru", "eggshell", "emerald", "fallow", "famous", "feldgrau", "fern", "flame",
    "flax", "folly", "fuchsia", "fulvous", "gamboge", "ginger", "glaucous", "gold", "goldenrod",
    "gray", "green", "grullo", "heliotrope", "icterine", "indigo", "iris", "isabelline", "ivory",
    "jade", "jasmine", "jasper", "khaki", "lavender", "lemon", "lilac", "lime", "magenta",
    "magnolia", "mahogany", "maize", "malachite", "maroon", "mauve", "mint", "mustard", "myrtle",
    "ochre", "olive", "olivine", "onyx", "orange", "orchid", "patina", "peach", "pear", "pearl",
    "peridot", "periwinkle", "phthalo", "pink", "platinum", "plum", "puce", "pumpkin", "purple",
    "raspberry", "red", "rose", "ruby", "ruddy", "rufous", "russet", "rust", "saffron", "salmon",
    "sand", "sandstorm", "sapphire", "scarlet", "seashell", "sepia", "shadow", "shamrock",
    "silver", "sinopia", "smalt", "snow", "straw", "sunglow", "sunset", "tan", "tangelo",
    "tangerine", "taupe", "tawny", "teal", "thistle", "tomato", "topaz", "tumbleweed", "turquoise",
    "ultramarine", "umber", "vanilla", "verdigris", "vermilion", "violet", "viridian", "white",
    "wisteria", "yellow", "zaffre",
];
