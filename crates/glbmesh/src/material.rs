use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gltf::material::AlphaMode;

use crate::mesh::{BaseColorImage, FlatPrimitive};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Copy PBR factors and the base-color image out of a material into the
/// primitive record. Image bytes from data URIs and buffer views are copied
/// into owned buffers; external references stay path strings. Embedded bytes
/// additionally feed header-based alpha detection, which can only upgrade
/// `has_alpha`, never clear it.
pub(crate) fn apply_material(
    prim: &mut FlatPrimitive,
    material: &gltf::Material<'_>,
    buffers: &[gltf::buffer::Data],
) {
    let pbr = material.pbr_metallic_roughness();
    prim.base_color_factor = pbr.base_color_factor();
    prim.metallic_factor = pbr.metallic_factor();
    prim.roughness_factor = pbr.roughness_factor();

    prim.has_alpha = matches!(material.alpha_mode(), AlphaMode::Blend | AlphaMode::Mask)
        || prim.base_color_factor[3] < 0.999;

    if let Some(info) = pbr.base_color_texture() {
        let image = info.texture().source();
        match image.source() {
            gltf::image::Source::Uri { uri, mime_type } => {
                prim.mime_type = mime_type.map(String::from);
                if uri.starts_with("data:") {
                    if let Some(bytes) = decode_data_uri(uri) {
                        prim.base_color_image = Some(BaseColorImage::Embedded(bytes));
                    }
                } else {
                    prim.base_color_image = Some(BaseColorImage::Path(uri.to_string()));
                }
            }
            gltf::image::Source::View { view, mime_type } => {
                prim.mime_type = Some(mime_type.to_string());
                if let Some(bytes) = view_bytes(&view, buffers) {
                    prim.base_color_image = Some(BaseColorImage::Embedded(bytes.to_vec()));
                }
            }
        }
    }

    if let Some(BaseColorImage::Embedded(bytes)) = &prim.base_color_image {
        if detect_image_alpha(bytes, prim.mime_type.as_deref()) {
            prim.has_alpha = true;
        }
    }
}

/// Decode the base64 payload of a `data:` URI (everything after the first
/// comma, standard alphabet with `=` padding).
pub(crate) fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let (_, payload) = uri.split_once(',')?;
    STANDARD.decode(payload).ok()
}

fn view_bytes<'a>(
    view: &gltf::buffer::View<'_>,
    buffers: &'a [gltf::buffer::Data],
) -> Option<&'a [u8]> {
    let data = buffers.get(view.buffer().index())?;
    data.get(view.offset()..view.offset() + view.length())
}

/// Header-only alpha sniffing on raw image bytes. PNG: truecolor+alpha
/// color type (6) at offset 25 behind a signature check. JPEG: never has
/// alpha. TGA: 32 bpp with a non-zero low nibble in the image descriptor.
/// Any other (or missing) MIME type falls back to the PNG heuristic.
pub(crate) fn detect_image_alpha(data: &[u8], mime_type: Option<&str>) -> bool {
    if data.len() < 16 {
        return false;
    }

    if let Some(mime) = mime_type {
        if mime.contains("png") {
            return png_truecolor_alpha(data);
        }
        if mime.contains("jpeg") || mime.contains("jpg") {
            return false;
        }
        if mime.contains("tga") && data.len() > 17 {
            let bpp = data[16];
            let descriptor = data[17];
            return bpp == 32 && (descriptor & 0x0f) != 0;
        }
    }

    png_truecolor_alpha(data)
}

fn png_truecolor_alpha(data: &[u8]) -> bool {
    data.len() > 25 && data[..8] == PNG_SIGNATURE && data[25] == 6
}
