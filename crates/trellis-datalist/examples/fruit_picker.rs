//! End-to-end walk through the datalist widget on a headless view tree:
//! build the advised page structure, bind the widget, feed it suggestions,
//! and drive a selection with synthetic clicks.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p trellis-datalist --example fruit_picker
//! ```

use trellis_datalist::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut tree = ViewTree::new();

    // Page setup: a text input immediately followed by the container.
    let page = tree.create_element("div");
    let input = tree.create_element("input");
    tree.set_attribute(input, "type", "text");
    let container = tree.create_element("div");
    tree.set_id(container, "datalist-autocomplete");
    tree.append_child(page, input);
    tree.append_child(page, container);

    let mut datalist = Datalist::bind(
        &mut tree,
        DatalistOptions::new()
            .with_margin_top("2px")
            .with_on_select(|| println!("-> selection callback fired")),
    )?;
    datalist
        .activated
        .connect(|value| println!("-> activated with {value:?}"));

    // The page's suggestion source produced some fruit.
    datalist.set_markup(
        &mut tree,
        "<option value=\"apple\">apple</option>\
         <option value=\"apricot\">apricot</option>\
         <option value=\"avocado\">avocado</option>",
    );
    println!("dropdown after content set ({:?}):", datalist.visibility());
    print!("{}", ViewTreeDebug::new(&tree, container));

    // The user clicks the second suggestion.
    let body = datalist.body().expect("widget is bound");
    let apricot = tree.children(body)[1];
    let mut click = ClickEvent::new(apricot);
    let outcome = datalist.dispatch_click(&mut tree, &mut click);

    println!("click outcome: {outcome:?}");
    println!("input now holds: {:?}", tree.attribute(input, "value"));
    println!("last selection:  {:?}", datalist.value());
    println!("dropdown state:  {:?}", datalist.visibility());

    Ok(())
}
