//! Metadata images used across integration tests.
//!
//! `corlib` plays the role of the framework every other image references.
//! `acme` is a small library exercising every member kind:
//!
//! ```text
//! interface INamed
//! interface IShape : INamed
//! class Shape : Object, IShape      { Name { get; }  Area() -> Double }
//! class Circle : Shape              { Radius; .ctor(Double); static Unit(); Scale(Double) }
//! class Canvas : Object             { .ctor(); Draw(Shape, Int32) -> Boolean; this[Int32] -> Shape;
//!                                     .cctor; event Changed; internal Reset() }
//! internal class Hidden             { Peek() -> Int32 }
//! ```

use typesearch::metadata::{
    EventDef, FieldDef, Image, MethodDef, PropertyDef, TypeDef, TypeRef,
};

pub fn sys(name: &str) -> TypeRef {
    TypeRef::new("System", name)
}

pub fn acme(name: &str) -> TypeRef {
    TypeRef::new("Acme", name)
}

pub fn corlib() -> Image {
    let object = TypeDef::new("System", "Object")
        .with_method(MethodDef::new("ToString", sys("String")))
        .with_method(MethodDef::constructor());
    let primitive = |name: &str| TypeDef::new("System", name).with_base(sys("ValueType"));

    Image::new("corlib")
        .with_type(object)
        .with_type(TypeDef::new("System", "ValueType").with_base(sys("Object")))
        .with_type(TypeDef::new("System", "String").with_base(sys("Object")))
        .with_type(primitive("Void"))
        .with_type(primitive("Int32"))
        .with_type(primitive("Double"))
        .with_type(primitive("Boolean"))
        .with_type(TypeDef::new("System", "EventHandler").with_base(sys("Object")))
}

pub fn acme_library() -> Image {
    let shape = TypeDef::new("Acme", "Shape")
        .with_base(sys("Object"))
        .with_interface(acme("IShape"))
        .with_read_only_property("Name", sys("String"), false)
        .with_method(MethodDef::new("Area", sys("Double")));

    let circle = TypeDef::new("Acme", "Circle")
        .with_base(acme("Shape"))
        .with_field(FieldDef::new("Radius", sys("Double")))
        .with_method(MethodDef::constructor().with_parameter("radius", sys("Double")))
        .with_method(MethodDef::new("Unit", acme("Circle")).as_static())
        .with_method(MethodDef::new("Scale", acme("Circle")).with_parameter("by", sys("Double")));

    let canvas = TypeDef::new("Acme", "Canvas")
        .with_base(sys("Object"))
        .with_method(MethodDef::constructor())
        .with_method(
            MethodDef::new("Draw", sys("Boolean"))
                .with_parameter("shape", acme("Shape"))
                .with_parameter("layer", sys("Int32")),
        )
        .with_method(MethodDef::new("get_Item", acme("Shape")).with_parameter("index", sys("Int32")))
        .with_property(
            PropertyDef::new("Item", acme("Shape"))
                .with_getter("get_Item")
                .with_index_parameter("index", sys("Int32")),
        )
        .with_method(MethodDef::type_initializer())
        .with_method(MethodDef::new("add_Changed", sys("Void")).with_parameter("h", sys("EventHandler")))
        .with_method(
            MethodDef::new("remove_Changed", sys("Void")).with_parameter("h", sys("EventHandler")),
        )
        .with_event(
            EventDef::new("Changed", sys("EventHandler"))
                .with_accessors("add_Changed", "remove_Changed"),
        )
        .with_method(MethodDef::new("Reset", sys("Void")).non_public());

    let hidden = TypeDef::new("Acme", "Hidden")
        .non_public()
        .with_method(MethodDef::new("Peek", sys("Int32")));

    Image::new("Acme")
        .with_type(TypeDef::interface("Acme", "INamed"))
        .with_type(TypeDef::interface("Acme", "IShape").with_interface(acme("INamed")))
        .with_type(shape)
        .with_type(circle)
        .with_type(canvas)
        .with_type(hidden)
}

/// Documentation ids of `acme_library` members, in static extraction order.
pub const ACME_IDS: &[&str] = &[
    "M:Acme.Shape.Area",
    "P:Acme.Shape.Name",
    "F:Acme.Circle.Radius",
    "M:Acme.Circle.#ctor(System.Double)",
    "M:Acme.Circle.Unit",
    "M:Acme.Circle.Scale(System.Double)",
    "M:Acme.Canvas.#ctor",
    "M:Acme.Canvas.Draw(Acme.Shape,System.Int32)",
    "P:Acme.Canvas.Item(System.Int32)",
];

pub const ACME_DOCS: &str = r#"<?xml version="1.0"?>
<doc>
  <assembly><name>Acme</name></assembly>
  <members>
    <member name="T:Acme.Canvas">
      <summary>A drawing surface.</summary>
    </member>
    <member name="M:Acme.Canvas.Draw(Acme.Shape,System.Int32)">
      <summary>Draws a <see cref="T:Acme.Shape"/>
        on a layer.</summary>
      <param name="shape">What to draw.</param>
      <param name="layer">Where, see <paramref name="layer"/>.</param>
      <returns>True when drawn.</returns>
    </member>
    <member name="P:Acme.Shape.Name">
      <summary>The display name.</summary>
      <value>Never empty.</value>
    </member>
    <member name="Q-not-an-identifier">
      <summary>Skipped.</summary>
    </member>
    <member name="M:Acme.Circle.#ctor(System.Double)">
      <summary>A circle of the given radius.</summary>
    </member>
  </members>
</doc>
"#;
