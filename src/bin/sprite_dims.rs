use desktop_pet::sprite::png_dimensions;

fn main() {
    desktop_pet::logging::init(false, None);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: sprite_dims <file.png>");
        std::process::exit(2);
    };

    match png_dimensions(&path) {
        Some((width, height)) => println!("Width: {width}, Height: {height}"),
        None => {
            eprintln!("could not read PNG dimensions from {path}");
            std::process::exit(1);
        }
    }
}
