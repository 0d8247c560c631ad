use serde::{Deserialize, Serialize};

/// Kind of layer on a creative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Text,
    Image,
}

/// Axis-aligned bounding box in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Closed-interval intersection: touching edges count as overlapping
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }
}

/// Flattened snapshot of one canvas layer at check time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Role markers live in the id ("value-tile", "cta", "tesco-tag", "safe-zone")
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default)]
    pub is_drinkaware: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl CanvasObject {
    /// Text layer with the given content and font size
    pub fn text(id: &str, text: &str, font_size: f64) -> Self {
        Self {
            kind: ObjectKind::Text,
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            text: Some(text.to_string()),
            font_size: Some(font_size),
            fill: None,
            font_family: None,
            image_name: None,
            is_drinkaware: false,
            z_index: None,
        }
    }

    /// Image layer with the given source name
    pub fn image(id: &str, image_name: &str) -> Self {
        Self {
            kind: ObjectKind::Image,
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            text: None,
            font_size: None,
            fill: None,
            font_family: None,
            image_name: Some(image_name.to_string()),
            is_drinkaware: false,
            z_index: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.to_string());
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == ObjectKind::Text
    }

    pub fn is_image(&self) -> bool {
        self.kind == ObjectKind::Image
    }

    pub fn id_contains(&self, marker: &str) -> bool {
        self.id.contains(marker)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }
}

/// Safe-zone margins reserved for platform UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeZone {
    pub top: u32,
    pub bottom: u32,
}

/// Supported creative aspect ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasFormat {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "1.91:1")]
    Landscape,
}

impl CanvasFormat {
    pub const ALL: [CanvasFormat; 3] = [
        CanvasFormat::Square,
        CanvasFormat::Story,
        CanvasFormat::Landscape,
    ];

    /// Aspect-ratio tag as used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            CanvasFormat::Square => "1:1",
            CanvasFormat::Story => "9:16",
            CanvasFormat::Landscape => "1.91:1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CanvasFormat::Square => "Square",
            CanvasFormat::Story => "Story",
            CanvasFormat::Landscape => "Landscape",
        }
    }

    /// Native (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            CanvasFormat::Square => (1080, 1080),
            CanvasFormat::Story => (1080, 1920),
            CanvasFormat::Landscape => (1200, 628),
        }
    }

    /// Only the Story format reserves safe zones
    pub fn safe_zone(&self) -> Option<SafeZone> {
        match self {
            CanvasFormat::Story => Some(SafeZone {
                top: 200,
                bottom: 250,
            }),
            CanvasFormat::Square | CanvasFormat::Landscape => None,
        }
    }
}

/// The whole creative at check time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSnapshot {
    /// Z-order, bottom first
    pub objects: Vec<CanvasObject>,
    pub background_color: String,
    pub width: f64,
    pub height: f64,
    pub format: CanvasFormat,
}

impl CanvasSnapshot {
    /// Empty canvas at the format's native size on a white background
    pub fn new(format: CanvasFormat) -> Self {
        let (width, height) = format.dimensions();
        Self {
            objects: Vec::new(),
            background_color: "#ffffff".to_string(),
            width: f64::from(width),
            height: f64::from(height),
            format,
        }
    }

    pub fn with_object(mut self, object: CanvasObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_background(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    pub fn text_objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.objects.iter().filter(|o| o.is_text())
    }

    pub fn image_objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.objects.iter().filter(|o| o.is_image())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Alcohol,
    NonAlcohol,
}

/// One compliance check invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    pub canvas_data: CanvasSnapshot,
    /// Base64 raster (optionally a data URL), only used for OCR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesco_tag: Option<String>,
}

impl ComplianceRequest {
    pub fn new(canvas_data: CanvasSnapshot) -> Self {
        Self {
            canvas_data,
            screenshot: None,
            product_type: None,
            tesco_tag: None,
        }
    }
}
