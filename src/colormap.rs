//! Named colormaps, resolved from two registries in priority order.
//!
//! The scientific registry holds the Crameri scientific colour maps
//! (perceptually uniform, colour-vision-deficiency friendly). The second
//! registry is the plotting library's set: the colormaps that ship with
//! `plotters` plus stop tables for the usual diverging maps (`RdBu`,
//! `coolwarm`, `bwr`, ...). Every name in either registry can be suffixed with
//! `_r` to reverse it.

use plotters::style::colors::colormaps::{
    BlackWhite, Bone, ColorMap, Copper, MandelbrotHSL, ViridisRGB, VulcanoHSL,
};
use plotters::style::{Color, RGBColor};

use crate::error::PlotError;

/// Registry a colormap was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapSource {
    Scientific,
    Library,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Viridis,
    Gray,
    Bone,
    Copper,
    Mandelbrot,
    Vulcano,
}

#[derive(Debug, Clone, Copy)]
enum Palette {
    Stops(&'static [[u8; 3]]),
    Builtin(Builtin),
}

/// A resolved colormap: maps a normalized scalar in `[0, 1]` to a color.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: String,
    source: ColormapSource,
    palette: Palette,
    reversed: bool,
}

impl Colormap {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> ColormapSource {
        self.source
    }

    /// Color at position `t`. Values outside `[0, 1]` are clamped, NaN maps to the low end.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        match self.palette {
            Palette::Stops(stops) => interpolate_stops(stops, t),
            Palette::Builtin(builtin) => sample_builtin(builtin, t),
        }
    }
}

/// Resolve `name` against the scientific registry first, then the library registry.
pub fn resolve_colormap(name: &str) -> Result<Colormap, PlotError> {
    scientific(name)
        .or_else(|| library(name))
        .ok_or_else(|| PlotError::UnknownColormap(name.to_string()))
}

/// Every resolvable colormap name, scientific registry first.
pub fn available_colormaps() -> Vec<String> {
    let scientific = SCIENTIFIC.iter().map(|(name, _)| *name);
    let library = LIBRARY.iter().map(|(name, _, _)| *name);
    scientific
        .chain(library)
        .flat_map(|name| [name.to_string(), format!("{name}_r")])
        .collect()
}

fn split_reversed(name: &str) -> (&str, bool) {
    match name.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (name, false),
    }
}

fn scientific(name: &str) -> Option<Colormap> {
    let (base, reversed) = split_reversed(name);
    SCIENTIFIC
        .iter()
        .find(|(candidate, _)| *candidate == base)
        .map(|(_, stops)| Colormap {
            name: name.to_string(),
            source: ColormapSource::Scientific,
            palette: Palette::Stops(stops),
            reversed,
        })
}

fn library(name: &str) -> Option<Colormap> {
    let (base, reversed) = split_reversed(name);
    LIBRARY
        .iter()
        .find(|(candidate, _, _)| *candidate == base)
        .map(|(_, palette, flipped)| Colormap {
            name: name.to_string(),
            source: ColormapSource::Library,
            palette: *palette,
            reversed: reversed ^ flipped,
        })
}

// --- sampling ---

fn interpolate_stops(stops: &[[u8; 3]], t: f64) -> RGBColor {
    if stops.len() == 1 {
        let [r, g, b] = stops[0];
        return RGBColor(r, g, b);
    }

    let scaled = t * (stops.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - lo as f64;

    let a = stops[lo];
    let b = stops[lo + 1];
    let mix = |i: usize| -> u8 {
        (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    RGBColor(mix(0), mix(1), mix(2))
}

fn sample_builtin(builtin: Builtin, t: f64) -> RGBColor {
    let t = t as f32;
    match builtin {
        Builtin::Viridis => to_rgb(ViridisRGB.get_color(t)),
        Builtin::Gray => to_rgb(BlackWhite.get_color(t)),
        Builtin::Bone => to_rgb(Bone.get_color(t)),
        Builtin::Copper => to_rgb(Copper.get_color(t)),
        Builtin::Mandelbrot => to_rgb(MandelbrotHSL.get_color(t)),
        Builtin::Vulcano => to_rgb(VulcanoHSL.get_color(t)),
    }
}

fn to_rgb<C: Color>(color: C) -> RGBColor {
    let (r, g, b) = color.to_backend_color().rgb;
    RGBColor(r, g, b)
}

// --- registries ---

/// Name, palette, and whether the name denotes the palette flipped.
const LIBRARY: &[(&str, Palette, bool)] = &[
    ("viridis", Palette::Builtin(Builtin::Viridis), false),
    ("gray", Palette::Builtin(Builtin::Gray), false),
    ("grey", Palette::Builtin(Builtin::Gray), false),
    ("binary", Palette::Builtin(Builtin::Gray), true),
    ("bone", Palette::Builtin(Builtin::Bone), false),
    ("copper", Palette::Builtin(Builtin::Copper), false),
    ("mandelbrot", Palette::Builtin(Builtin::Mandelbrot), false),
    ("vulcano", Palette::Builtin(Builtin::Vulcano), false),
    ("RdBu", Palette::Stops(&RD_BU), false),
    ("RdGy", Palette::Stops(&RD_GY), false),
    ("RdYlBu", Palette::Stops(&RD_YL_BU), false),
    ("RdYlGn", Palette::Stops(&RD_YL_GN), false),
    ("Spectral", Palette::Stops(&SPECTRAL), false),
    ("PiYG", Palette::Stops(&PI_YG), false),
    ("PRGn", Palette::Stops(&PRGN), false),
    ("PuOr", Palette::Stops(&PU_OR), false),
    ("BrBG", Palette::Stops(&BR_BG), false),
    ("bwr", Palette::Stops(&BWR), false),
    ("seismic", Palette::Stops(&SEISMIC), false),
    ("coolwarm", Palette::Stops(&COOLWARM), false),
];

// ColorBrewer and matplotlib diverging maps, low end first.
const RD_BU: [[u8; 3]; 11] = [
    [103, 0, 31],
    [178, 24, 43],
    [214, 96, 77],
    [244, 165, 130],
    [253, 219, 199],
    [247, 247, 247],
    [209, 229, 240],
    [146, 197, 222],
    [67, 147, 195],
    [33, 102, 172],
    [5, 48, 97],
];

const RD_GY: [[u8; 3]; 11] = [
    [103, 0, 31],
    [178, 24, 43],
    [214, 96, 77],
    [244, 165, 130],
    [253, 219, 199],
    [255, 255, 255],
    [224, 224, 224],
    [186, 186, 186],
    [135, 135, 135],
    [77, 77, 77],
    [26, 26, 26],
];

const RD_YL_BU: [[u8; 3]; 11] = [
    [165, 0, 38],
    [215, 48, 39],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 144],
    [255, 255, 191],
    [224, 243, 248],
    [171, 217, 233],
    [116, 173, 209],
    [69, 117, 180],
    [49, 54, 149],
];

const RD_YL_GN: [[u8; 3]; 11] = [
    [165, 0, 38],
    [215, 48, 39],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 139],
    [255, 255, 191],
    [217, 239, 139],
    [166, 217, 106],
    [102, 189, 99],
    [26, 152, 80],
    [0, 104, 55],
];

const SPECTRAL: [[u8; 3]; 11] = [
    [158, 1, 66],
    [213, 62, 79],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 139],
    [255, 255, 191],
    [230, 245, 152],
    [171, 221, 164],
    [102, 194, 165],
    [50, 136, 189],
    [94, 79, 162],
];

const PI_YG: [[u8; 3]; 11] = [
    [142, 1, 82],
    [197, 27, 125],
    [222, 119, 174],
    [241, 182, 218],
    [253, 224, 239],
    [247, 247, 247],
    [230, 245, 208],
    [184, 225, 134],
    [127, 188, 65],
    [77, 146, 33],
    [39, 100, 25],
];

const PRGN: [[u8; 3]; 11] = [
    [64, 0, 75],
    [118, 42, 131],
    [153, 112, 171],
    [194, 165, 207],
    [231, 212, 232],
    [247, 247, 247],
    [217, 240, 211],
    [166, 219, 160],
    [90, 174, 97],
    [27, 120, 55],
    [0, 68, 27],
];

const PU_OR: [[u8; 3]; 11] = [
    [127, 59, 8],
    [179, 88, 6],
    [224, 130, 20],
    [253, 184, 99],
    [254, 224, 182],
    [247, 247, 247],
    [216, 218, 235],
    [178, 171, 210],
    [128, 115, 172],
    [84, 39, 136],
    [45, 0, 75],
];

const BR_BG: [[u8; 3]; 11] = [
    [84, 48, 5],
    [140, 81, 10],
    [191, 129, 45],
    [223, 194, 125],
    [246, 232, 195],
    [245, 245, 245],
    [199, 234, 229],
    [128, 205, 193],
    [53, 151, 143],
    [1, 102, 94],
    [0, 60, 48],
];

const BWR: [[u8; 3]; 3] = [
    [0, 0, 255],
    [255, 255, 255],
    [255, 0, 0],
];

const SEISMIC: [[u8; 3]; 5] = [
    [0, 0, 77],
    [0, 0, 255],
    [255, 255, 255],
    [255, 0, 0],
    [128, 0, 0],
];

const COOLWARM: [[u8; 3]; 9] = [
    [59, 76, 192],
    [98, 130, 234],
    [141, 176, 254],
    [184, 208, 249],
    [221, 221, 221],
    [245, 196, 173],
    [244, 154, 123],
    [222, 96, 77],
    [180, 4, 38],
];

// Evenly spaced control points of the Crameri palettes, low end first.
const SCIENTIFIC: &[(&str, &[[u8; 3]])] = &[
    ("roma", &ROMA),
    ("vik", &VIK),
    ("berlin", &BERLIN),
    ("broc", &BROC),
    ("cork", &CORK),
    ("batlow", &BATLOW),
    ("lajolla", &LAJOLLA),
    ("oslo", &OSLO),
    ("hawaii", &HAWAII),
    ("davos", &DAVOS),
    ("acton", &ACTON),
    ("bamako", &BAMAKO),
    ("batlowK", &BATLOW_K),
    ("batlowW", &BATLOW_W),
    ("bilbao", &BILBAO),
    ("buda", &BUDA),
    ("devon", &DEVON),
    ("glasgow", &GLASGOW),
    ("grayC", &GRAY_C),
    ("imola", &IMOLA),
    ("lapaz", &LAPAZ),
    ("lipari", &LIPARI),
    ("navia", &NAVIA),
    ("nuuk", &NUUK),
    ("tokyo", &TOKYO),
    ("turku", &TURKU),
    ("bam", &BAM),
    ("lisbon", &LISBON),
    ("managua", &MANAGUA),
    ("tofino", &TOFINO),
    ("vanimo", &VANIMO),
    ("bukavu", &BUKAVU),
    ("fes", &FES),
    ("oleron", &OLERON),
    ("romaO", &ROMA_O),
    ("vikO", &VIK_O),
    ("bamO", &BAM_O),
    ("brocO", &BROC_O),
    ("corkO", &CORK_O),
];

const ROMA: [[u8; 3]; 11] = [
    [126, 23, 0],
    [147, 67, 15],
    [166, 106, 30],
    [186, 146, 50],
    [210, 192, 94],
    [211, 234, 176],
    [150, 222, 196],
    [92, 187, 202],
    [58, 141, 192],
    [39, 96, 175],
    [26, 51, 153],
];

const VIK: [[u8; 3]; 11] = [
    [0, 18, 97],
    [3, 60, 133],
    [32, 108, 167],
    [111, 163, 199],
    [193, 214, 228],
    [234, 229, 221],
    [226, 193, 164],
    [204, 143, 98],
    [172, 91, 40],
    [128, 38, 8],
    [89, 0, 8],
];

const BERLIN: [[u8; 3]; 11] = [
    [158, 176, 255],
    [104, 164, 227],
    [59, 130, 180],
    [36, 84, 117],
    [21, 42, 56],
    [25, 12, 9],
    [64, 13, 1],
    [113, 32, 9],
    [164, 78, 56],
    [214, 132, 121],
    [255, 173, 173],
];

const BROC: [[u8; 3]; 11] = [
    [44, 26, 76],
    [40, 62, 123],
    [66, 109, 160],
    [124, 155, 188],
    [186, 203, 217],
    [237, 238, 226],
    [219, 219, 175],
    [179, 179, 121],
    [132, 132, 75],
    [86, 86, 38],
    [38, 38, 0],
];

const CORK: [[u8; 3]; 11] = [
    [44, 25, 76],
    [41, 66, 126],
    [71, 114, 162],
    [130, 160, 192],
    [196, 208, 223],
    [230, 237, 232],
    [186, 214, 188],
    [127, 176, 128],
    [72, 137, 72],
    [52, 103, 34],
    [66, 77, 2],
];

const BATLOW: [[u8; 3]; 10] = [
    [1, 25, 89],
    [16, 63, 96],
    [28, 90, 98],
    [60, 109, 86],
    [104, 123, 62],
    [157, 137, 43],
    [210, 147, 67],
    [248, 161, 123],
    [253, 183, 188],
    [250, 204, 250],
];

const LAJOLLA: [[u8; 3]; 11] = [
    [255, 254, 203],
    [251, 236, 153],
    [245, 212, 105],
    [234, 173, 81],
    [225, 132, 73],
    [212, 96, 72],
    [179, 72, 64],
    [128, 55, 46],
    [79, 38, 24],
    [46, 29, 10],
    [26, 26, 1],
];

const OSLO: [[u8; 3]; 11] = [
    [1, 1, 1],
    [12, 22, 36],
    [20, 43, 71],
    [28, 66, 110],
    [43, 91, 150],
    [79, 119, 186],
    [117, 143, 197],
    [152, 166, 200],
    [186, 192, 207],
    [221, 222, 227],
    [255, 255, 255],
];

const HAWAII: [[u8; 3]; 11] = [
    [140, 2, 115],
    [146, 35, 91],
    [152, 62, 71],
    [158, 87, 52],
    [162, 115, 34],
    [161, 146, 30],
    [142, 175, 58],
    [108, 197, 105],
    [89, 210, 162],
    [116, 227, 219],
    [179, 242, 253],
];

const DAVOS: [[u8; 3]; 10] = [
    [0, 5, 74],
    [23, 50, 120],
    [49, 89, 155],
    [81, 117, 164],
    [109, 136, 160],
    [137, 153, 151],
    [166, 172, 146],
    [203, 203, 161],
    [238, 238, 198],
    [254, 254, 254],
];

const ACTON: [[u8; 3]; 10] = [
    [46, 33, 77],
    [73, 55, 106],
    [105, 75, 131],
    [142, 88, 147],
    [177, 100, 155],
    [211, 120, 170],
    [212, 148, 189],
    [213, 173, 206],
    [218, 197, 221],
    [230, 230, 240],
];

const BAMAKO: [[u8; 3]; 10] = [
    [0, 64, 76],
    [17, 77, 64],
    [35, 91, 51],
    [55, 106, 37],
    [80, 123, 21],
    [109, 138, 6],
    [145, 150, 3],
    [184, 164, 35],
    [218, 186, 84],
    [255, 229, 173],
];

const BATLOW_K: [[u8; 3]; 10] = [
    [4, 5, 10],
    [30, 45, 60],
    [45, 76, 84],
    [66, 99, 89],
    [98, 116, 76],
    [142, 131, 62],
    [192, 144, 73],
    [234, 160, 119],
    [249, 187, 184],
    [249, 204, 249],
];

const BATLOW_W: [[u8; 3]; 10] = [
    [1, 25, 89],
    [16, 63, 96],
    [28, 90, 98],
    [60, 109, 86],
    [104, 123, 62],
    [157, 137, 43],
    [210, 147, 67],
    [248, 166, 126],
    [254, 204, 190],
    [255, 254, 254],
];

const BILBAO: [[u8; 3]; 10] = [
    [255, 255, 255],
    [218, 218, 218],
    [199, 194, 175],
    [189, 173, 134],
    [178, 148, 110],
    [170, 122, 98],
    [163, 97, 87],
    [149, 69, 68],
    [121, 37, 42],
    [77, 0, 1],
];

const BUDA: [[u8; 3]; 11] = [
    [179, 1, 179],
    [180, 39, 165],
    [184, 62, 155],
    [189, 84, 146],
    [195, 104, 139],
    [202, 124, 132],
    [208, 144, 124],
    [214, 164, 116],
    [220, 186, 107],
    [230, 212, 96],
    [255, 255, 102],
];

const DEVON: [[u8; 3]; 10] = [
    [44, 26, 76],
    [41, 50, 104],
    [39, 75, 134],
    [52, 99, 170],
    [99, 121, 205],
    [150, 142, 225],
    [183, 168, 236],
    [207, 195, 242],
    [231, 225, 249],
    [255, 255, 255],
];

const GLASGOW: [[u8; 3]; 10] = [
    [54, 18, 26],
    [83, 26, 24],
    [104, 46, 13],
    [112, 73, 14],
    [112, 98, 44],
    [107, 119, 78],
    [98, 137, 115],
    [102, 153, 160],
    [149, 167, 203],
    [218, 193, 238],
];

const GRAY_C: [[u8; 3]; 10] = [
    [255, 255, 255],
    [222, 222, 222],
    [193, 193, 193],
    [165, 165, 165],
    [138, 138, 138],
    [112, 112, 112],
    [87, 87, 87],
    [63, 63, 63],
    [40, 40, 40],
    [0, 0, 0],
];

const IMOLA: [[u8; 3]; 10] = [
    [26, 51, 179],
    [36, 69, 168],
    [43, 86, 156],
    [51, 102, 145],
    [61, 119, 138],
    [80, 141, 135],
    [104, 166, 128],
    [131, 194, 119],
    [168, 225, 104],
    [255, 255, 102],
];

const LAPAZ: [[u8; 3]; 10] = [
    [26, 12, 100],
    [33, 44, 124],
    [40, 76, 144],
    [52, 104, 157],
    [73, 130, 161],
    [108, 152, 160],
    [148, 167, 155],
    [187, 180, 158],
    [231, 211, 194],
    [254, 242, 243],
];

const LIPARI: [[u8; 3]; 10] = [
    [3, 19, 38],
    [20, 53, 91],
    [59, 70, 117],
    [107, 76, 124],
    [160, 84, 118],
    [205, 99, 102],
    [229, 132, 101],
    [233, 169, 128],
    [238, 212, 174],
    [253, 245, 218],
];

const NAVIA: [[u8; 3]; 10] = [
    [3, 19, 38],
    [14, 51, 81],
    [22, 79, 113],
    [29, 105, 130],
    [42, 128, 130],
    [69, 149, 117],
    [109, 169, 108],
    [157, 189, 111],
    [208, 214, 152],
    [252, 244, 217],
];

const NUUK: [[u8; 3]; 10] = [
    [5, 89, 140],
    [40, 97, 130],
    [75, 112, 130],
    [108, 129, 138],
    [137, 147, 148],
    [162, 164, 151],
    [178, 179, 144],
    [189, 190, 134],
    [214, 214, 134],
    [254, 254, 178],
];

const TOKYO: [[u8; 3]; 10] = [
    [26, 14, 52],
    [68, 32, 68],
    [103, 63, 85],
    [120, 98, 100],
    [130, 129, 111],
    [139, 160, 120],
    [152, 195, 132],
    [187, 230, 158],
    [233, 247, 205],
    [254, 254, 216],
];

const TURKU: [[u8; 3]; 10] = [
    [0, 0, 0],
    [36, 36, 31],
    [66, 66, 52],
    [96, 94, 67],
    [133, 121, 79],
    [177, 141, 99],
    [214, 152, 131],
    [240, 172, 172],
    [253, 206, 205],
    [255, 230, 230],
];

const BAM: [[u8; 3]; 11] = [
    [101, 2, 76],
    [155, 56, 136],
    [199, 122, 187],
    [230, 184, 223],
    [243, 228, 240],
    [244, 243, 236],
    [221, 232, 202],
    [179, 203, 142],
    [123, 158, 75],
    [70, 108, 30],
    [12, 64, 6],
];

const LISBON: [[u8; 3]; 11] = [
    [230, 229, 255],
    [171, 183, 220],
    [108, 133, 179],
    [50, 82, 127],
    [21, 37, 59],
    [25, 25, 25],
    [56, 52, 34],
    [100, 93, 58],
    [152, 145, 99],
    [207, 202, 149],
    [255, 255, 217],
];

const MANAGUA: [[u8; 3]; 11] = [
    [255, 207, 103],
    [230, 165, 86],
    [207, 128, 78],
    [179, 93, 74],
    [145, 71, 86],
    [107, 74, 118],
    [91, 96, 157],
    [99, 130, 190],
    [118, 167, 216],
    [135, 205, 237],
    [140, 238, 255],
];

const TOFINO: [[u8; 3]; 11] = [
    [222, 217, 255],
    [144, 160, 220],
    [65, 101, 174],
    [35, 55, 99],
    [18, 24, 33],
    [14, 22, 18],
    [23, 58, 34],
    [35, 104, 53],
    [74, 155, 77],
    [152, 203, 120],
    [219, 230, 155],
];

const VANIMO: [[u8; 3]; 11] = [
    [255, 205, 253],
    [210, 127, 203],
    [160, 69, 152],
    [92, 38, 88],
    [33, 25, 32],
    [21, 25, 18],
    [37, 51, 22],
    [63, 90, 30],
    [97, 136, 43],
    [152, 180, 76],
    [190, 253, 165],
];

const BUKAVU: [[u8; 3]; 10] = [
    [25, 51, 51],
    [34, 92, 125],
    [48, 132, 199],
    [109, 181, 230],
    [168, 217, 240],
    [54, 98, 60],
    [100, 134, 76],
    [165, 150, 100],
    [212, 180, 150],
    [249, 230, 224],
];

const FES: [[u8; 3]; 10] = [
    [13, 13, 13],
    [61, 61, 61],
    [110, 110, 110],
    [166, 166, 166],
    [224, 224, 224],
    [22, 77, 41],
    [82, 113, 55],
    [147, 132, 68],
    [213, 146, 131],
    [254, 203, 218],
];

const OLERON: [[u8; 3]; 10] = [
    [26, 38, 89],
    [58, 72, 125],
    [94, 108, 163],
    [134, 148, 202],
    [183, 195, 241],
    [40, 75, 5],
    [87, 102, 42],
    [138, 127, 74],
    [196, 167, 124],
    [253, 253, 230],
];

const ROMA_O: [[u8; 3]; 11] = [
    [115, 57, 87],
    [124, 53, 58],
    [142, 78, 41],
    [165, 120, 52],
    [194, 170, 97],
    [197, 215, 176],
    [146, 200, 206],
    [89, 156, 199],
    [80, 104, 170],
    [100, 66, 126],
    [115, 57, 87],
];

const VIK_O: [[u8; 3]; 11] = [
    [79, 25, 61],
    [65, 50, 107],
    [72, 95, 154],
    [120, 149, 191],
    [182, 196, 214],
    [219, 206, 194],
    [212, 157, 129],
    [185, 101, 72],
    [141, 56, 41],
    [101, 29, 45],
    [79, 25, 61],
];

const BAM_O: [[u8; 3]; 11] = [
    [79, 50, 66],
    [114, 71, 106],
    [164, 115, 156],
    [204, 169, 196],
    [217, 209, 212],
    [196, 204, 175],
    [152, 170, 113],
    [104, 128, 62],
    [75, 90, 40],
    [70, 61, 44],
    [79, 50, 66],
];

const BROC_O: [[u8; 3]; 11] = [
    [55, 49, 64],
    [57, 72, 113],
    [90, 119, 163],
    [152, 171, 203],
    [208, 215, 223],
    [221, 219, 196],
    [187, 185, 134],
    [135, 134, 82],
    [87, 86, 52],
    [60, 55, 51],
    [55, 49, 64],
];

const CORK_O: [[u8; 3]; 11] = [
    [63, 62, 58],
    [61, 80, 113],
    [88, 121, 160],
    [146, 170, 197],
    [200, 212, 218],
    [196, 218, 198],
    [135, 182, 137],
    [84, 136, 80],
    [64, 95, 45],
    [64, 70, 44],
    [63, 62, 58],
];
