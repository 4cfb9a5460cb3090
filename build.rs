//! 构建时生成时钟图标 icon.ico 并嵌入 Windows 可执行文件

/// 表盘外圈颜色（蓝）
#[cfg_attr(not(windows), allow(dead_code))]
const FACE: [u8; 4] = [0, 0, 255, 255];
/// 指针颜色（红）
#[cfg_attr(not(windows), allow(dead_code))]
const HANDS: [u8; 4] = [255, 0, 0, 255];
/// 表盘底色
#[cfg_attr(not(windows), allow(dead_code))]
const BG: [u8; 4] = [240, 240, 240, 255];

/// 点到线段的距离
#[cfg_attr(not(windows), allow(dead_code))]
fn dist_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// 画一个 10:10 的小表盘：外圈 + 时针 + 分针，圆外透明
#[cfg_attr(not(windows), allow(dead_code))]
fn make_rgba_clock(size: u32) -> Vec<u8> {
    let s = size as f32;
    let c = (s * 0.5, s * 0.5);
    let r = s * 0.46;
    let ring = (s * 0.08).max(1.0);
    let hand_w = (s * 0.06).max(1.0);
    let hour_tip = (c.0 - s * 0.2 * 0.866, c.1 - s * 0.2 * 0.5);
    let minute_tip = (c.0 + s * 0.3 * 0.5, c.1 - s * 0.3 * 0.866);

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let p = ((x as f32) + 0.5, (y as f32) + 0.5);
            let d = ((p.0 - c.0).powi(2) + (p.1 - c.1).powi(2)).sqrt();
            let px = if d > r {
                [0, 0, 0, 0]
            } else if d > r - ring {
                FACE
            } else if dist_to_segment(p, c, hour_tip) <= hand_w
                || dist_to_segment(p, c, minute_tip) <= hand_w * 0.7
            {
                HANDS
            } else {
                BG
            };
            rgba.extend_from_slice(&px);
        }
    }
    rgba
}

fn main() {
    #[cfg(windows)]
    {
        let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
        let icon_path = manifest_dir.join("icon.ico");

        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for &size in &[16u32, 32u32, 48u32] {
            let image = ico::IconImage::from_rgba_data(size, size, make_rgba_clock(size));
            let entry = ico::IconDirEntry::encode(&image).expect("encode icon entry");
            icon_dir.add_entry(entry);
        }

        let mut file = std::fs::File::create(&icon_path).expect("create icon.ico");
        icon_dir.write(&mut file).expect("write icon.ico");

        let mut res = winres::WindowsResource::new();
        res.set_icon("icon.ico");
        if let Err(e) = res.compile() {
            println!("cargo:warning=winres: {e} (icon not embedded)");
        }
    }
}
