//! # Primitives géométriques
//!
//! Chaque forme sait se transformer en balise (SVG) via le trait [`Render`].
//! L'énumération fermée [`Primitive`] regroupe toutes les formes que le
//! décomposeur peut produire ; sa variante `Null` rend toujours une chaîne
//! vide.
//!
//! Les attributs sont passés dans une [`Attributes`] ordonnée : l'ordre
//! d'insertion est l'ordre d'écriture.
//!
//! ```
//! use rusty_laby_svg::primitives::{attributes, tag};
//! use serde_json::json;
//!
//! let attrs = attributes(json!({"stroke": "black", "stroke_width": 2}));
//! assert_eq!(tag("line", None, &attrs), r#"<line stroke="black" stroke-width="2" />"#);
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// Attributs d'une balise, dans l'ordre fourni.
pub type Attributes = Map<String, Value>;

/// Tout ce qui peut produire du balisage.
pub trait Render {
    fn render(&self, attributes: &Attributes) -> String;
}

/// Convertit un objet JSON (typiquement `json!({...})`) en attributs.
///
/// Toute autre valeur donne une liste vide.
pub fn attributes(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        _ => Attributes::new(),
    }
}

/// Génère une balise XML.
///
/// # Arguments
///
/// * `name` - Le nom de l'élément (`rect`, `line`, ...).
/// * `content` - Le contenu textuel ; sans contenu la balise est auto-fermante.
/// * `attributes` - Les attributs ; les `_` des noms deviennent des `-`.
///
/// # Retour
///
/// `<name a="v" />` ou `<name a="v">content</name>`.
pub fn tag(name: &str, content: Option<&str>, attributes: &Attributes) -> String {
    let mut attrs = String::new();
    for (key, value) in attributes {
        attrs.push_str(&format!(" {}=\"{}\"", key.replace('_', "-"), format_value(value)));
    }
    match content {
        None => format!("<{}{} />", name, attrs),
        Some(content) => format!("<{}{}>{}</{}>", name, attrs, content, name),
    }
}

/// Valeur d'attribut en texte : chaîne telle quelle, nombre et booléen en
/// notation JSON (`true`/`false`), `null` vide.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Copie `base` puis y écrit `overrides` ; une clé existante garde sa place.
fn merged(base: &Attributes, overrides: Attributes) -> Attributes {
    let mut attrs = base.clone();
    for (key, value) in overrides {
        attrs.insert(key, value);
    }
    attrs
}

/// Point euclidien de coordonnées entières.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Retourne le point décalé de `(dx, dy)`.
    ///
    /// Le calcul boucle aux bornes de `i32` au lieu de paniquer.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Render for Point {
    /// `"x,y"`, pour l'attribut `points` ; les attributs sont ignorés.
    fn render(&self, _attributes: &Attributes) -> String {
        self.to_string()
    }
}

/// Segment délimité par deux points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Render for Line {
    fn render(&self, attributes: &Attributes) -> String {
        let mut attrs = Attributes::new();
        attrs.insert("x1".into(), self.start.x.into());
        attrs.insert("y1".into(), self.start.y.into());
        attrs.insert("x2".into(), self.end.x.into());
        attrs.insert("y2".into(), self.end.y.into());
        tag("line", None, &merged(&attrs, attributes.clone()))
    }
}

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_points(name: &str, points: &[Point], attributes: &Attributes) -> String {
    let mut attrs = Attributes::new();
    attrs.insert("points".into(), points_attribute(points).into());
    tag(name, None, &merged(&attrs, attributes.clone()))
}

/// Ligne brisée ouverte : le dernier point n'est pas relié au premier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyline(pub Vec<Point>);

impl Render for Polyline {
    fn render(&self, attributes: &Attributes) -> String {
        render_points("polyline", &self.0, attributes)
    }
}

/// Forme fermée.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon(pub Vec<Point>);

impl Render for Polygon {
    fn render(&self, attributes: &Attributes) -> String {
        render_points("polygon", &self.0, attributes)
    }
}

/// Segments indépendants, sans équivalent SVG : chaque ligne est rendue à la suite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisjointLines(pub Vec<Line>);

impl Render for DisjointLines {
    fn render(&self, attributes: &Attributes) -> String {
        self.0.iter().map(|line| line.render(attributes)).collect()
    }
}

/// Rectangle, éventuellement ancré sur son coin haut-gauche.
///
/// Quand l'ancre est présente, ses `x`/`y` sont écrits dans les attributs :
/// un `x` ou `y` fourni par l'appelant garde sa position mais prend la valeur
/// de l'ancre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub top_left: Option<Point>,
}

impl Rect {
    pub fn at(top_left: Point) -> Self {
        Self {
            top_left: Some(top_left),
        }
    }
}

impl Render for Rect {
    fn render(&self, attributes: &Attributes) -> String {
        match self.top_left {
            Some(point) => {
                let mut anchor = Attributes::new();
                anchor.insert("x".into(), point.x.into());
                anchor.insert("y".into(), point.y.into());
                tag("rect", None, &merged(attributes, anchor))
            }
            None => tag("rect", None, attributes),
        }
    }
}

/// Texte positionné sur un point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    pub content: String,
    pub point: Point,
}

impl Text {
    pub fn new(content: impl Into<String>, point: Point) -> Self {
        Self {
            content: content.into(),
            point,
        }
    }
}

impl Render for Text {
    fn render(&self, attributes: &Attributes) -> String {
        let mut attrs = Attributes::new();
        attrs.insert("x".into(), self.point.x.into());
        attrs.insert("y".into(), self.point.y.into());
        tag("text", Some(self.content.as_str()), &merged(&attrs, attributes.clone()))
    }
}

/// Famille fermée des formes dessinables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Primitive {
    Point(Point),
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
    DisjointLines(DisjointLines),
    Rect(Rect),
    Text(Text),
    /// Rien à dessiner.
    #[default]
    Null,
}

impl Render for Primitive {
    fn render(&self, attributes: &Attributes) -> String {
        match self {
            Primitive::Point(point) => point.render(attributes),
            Primitive::Line(line) => line.render(attributes),
            Primitive::Polyline(polyline) => polyline.render(attributes),
            Primitive::Polygon(polygon) => polygon.render(attributes),
            Primitive::DisjointLines(lines) => lines.render(attributes),
            Primitive::Rect(rect) => rect.render(attributes),
            Primitive::Text(text) => text.render(attributes),
            Primitive::Null => String::new(),
        }
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Primitive::Line(line)
    }
}

impl From<Polyline> for Primitive {
    fn from(polyline: Polyline) -> Self {
        Primitive::Polyline(polyline)
    }
}

impl From<Polygon> for Primitive {
    fn from(polygon: Polygon) -> Self {
        Primitive::Polygon(polygon)
    }
}

impl From<DisjointLines> for Primitive {
    fn from(lines: DisjointLines) -> Self {
        Primitive::DisjointLines(lines)
    }
}
