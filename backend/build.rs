use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let embed_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .expect("copy frontend bundle");
    }

    // `include_dir!` needs the directory even when the frontend was never built.
    fs::create_dir_all(&embed_dir).expect("create embed dir");

    println!("cargo:rerun-if-changed=../frontend/dist");
}
