use flick_camera::{OrthoCamera, ScrollLimits};
use glow::*;
use std::mem;
use std::sync::Arc;

const CELL_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aInstancePos;
layout (location = 2) in vec3 aInstanceColor;

uniform mat4 uProjection;

out vec3 vColor;

void main() {
    vec2 worldPos = aInstancePos + aPos;
    gl_Position = uProjection * vec4(worldPos, 0.0, 1.0);
    vColor = aInstanceColor;
}
"#;

const CELL_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec3 vColor;
out vec4 FragColor;

void main() {
    FragColor = vec4(vColor, 1.0);
}
"#;

const LINE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;

void main() {
    gl_Position = uProjection * vec4(aPos, 0.0, 1.0);
}
"#;

const LINE_FRAGMENT_SHADER: &str = r#"#version 330 core
uniform vec4 uColor;
out vec4 FragColor;

void main() {
    FragColor = uColor;
}
"#;

const CELL_LIGHT: [f32; 3] = [0.16, 0.20, 0.28];
const CELL_DARK: [f32; 3] = [0.12, 0.15, 0.22];
/// Cells outside the limit box are dimmed by this factor
const OUTSIDE_DIM: f32 = 0.45;
const GRID_LINE_COLOR: [f32; 4] = [0.2, 0.4, 0.8, 0.3];
const LIMIT_LINE_COLOR: [f32; 4] = [0.95, 0.65, 0.2, 0.9];
/// Floats per cell instance: position (2) + color (3)
const CELL_STRIDE: usize = 5;

/// Draws the scrollable world: a checkerboard, grid lines and the limit box
pub struct Renderer {
    gl: Arc<glow::Context>,
    cell_program: NativeProgram,
    cell_vao: NativeVertexArray,
    quad_vbo: NativeBuffer,
    instance_vbo: NativeBuffer,
    cell_projection_loc: NativeUniformLocation,
    line_program: NativeProgram,
    line_vao: NativeVertexArray,
    line_vbo: NativeBuffer,
    line_projection_loc: NativeUniformLocation,
    line_color_loc: NativeUniformLocation,
}

unsafe fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<NativeProgram, String> {
    let mut shaders = Vec::with_capacity(2);
    for (kind, src) in [(VERTEX_SHADER, vertex_src), (FRAGMENT_SHADER, fragment_src)] {
        let shader = gl
            .create_shader(kind)
            .map_err(|e| format!("Failed to create shader: {}", e))?;
        gl.shader_source(shader, src);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            return Err(gl.get_shader_info_log(shader));
        }
        shaders.push(shader);
    }

    let program = gl
        .create_program()
        .map_err(|e| format!("Failed to create program: {}", e))?;
    for &shader in &shaders {
        gl.attach_shader(program, shader);
    }
    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        return Err(gl.get_program_info_log(program));
    }

    for shader in shaders {
        gl.delete_shader(shader);
    }
    Ok(program)
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, String> {
        unsafe {
            let cell_program = compile_program(&gl, CELL_VERTEX_SHADER, CELL_FRAGMENT_SHADER)?;
            let cell_projection_loc = gl
                .get_uniform_location(cell_program, "uProjection")
                .ok_or("Failed to get cell projection uniform location")?;

            // Unit quad (0,0 to 1,1)
            let vertices: [f32; 12] = [
                0.0, 0.0, // bottom-left
                1.0, 0.0, // bottom-right
                1.0, 1.0, // top-right
                0.0, 0.0, // bottom-left
                1.0, 1.0, // top-right
                0.0, 1.0, // top-left
            ];

            let cell_vao = gl
                .create_vertex_array()
                .map_err(|e| format!("Failed to create VAO: {}", e))?;
            gl.bind_vertex_array(Some(cell_vao));

            let quad_vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(quad_vbo));
            gl.buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&vertices), STATIC_DRAW);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

            let instance_vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create instance VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(instance_vbo));
            let stride = (CELL_STRIDE * mem::size_of::<f32>()) as i32;
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, FLOAT, false, stride, 0);
            gl.vertex_attrib_divisor(1, 1);
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 3, FLOAT, false, stride, 8);
            gl.vertex_attrib_divisor(2, 1);

            gl.bind_vertex_array(None);

            let line_program = compile_program(&gl, LINE_VERTEX_SHADER, LINE_FRAGMENT_SHADER)?;
            let line_projection_loc = gl
                .get_uniform_location(line_program, "uProjection")
                .ok_or("Failed to get line projection uniform location")?;
            let line_color_loc = gl
                .get_uniform_location(line_program, "uColor")
                .ok_or("Failed to get line color uniform location")?;

            let line_vao = gl
                .create_vertex_array()
                .map_err(|e| format!("Failed to create line VAO: {}", e))?;
            gl.bind_vertex_array(Some(line_vao));
            let line_vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create line VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(line_vbo));
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);
            gl.bind_vertex_array(None);

            gl.enable(BLEND);
            gl.blend_func(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);

            Ok(Self {
                gl,
                cell_program,
                cell_vao,
                quad_vbo,
                instance_vbo,
                cell_projection_loc,
                line_program,
                line_vao,
                line_vbo,
                line_projection_loc,
                line_color_loc,
            })
        }
    }

    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    pub fn render(
        &mut self,
        camera: &OrthoCamera,
        limits: &ScrollLimits,
        show_grid_lines: bool,
    ) {
        puffin::profile_function!();

        let (min_x, max_x, min_y, max_y) = camera.visible_bounds();
        let projection = camera.projection_matrix();

        unsafe {
            self.gl.clear_color(0.05, 0.08, 0.15, 1.0);
            self.gl.clear(COLOR_BUFFER_BIT);

            self.gl.use_program(Some(self.cell_program));
            self.gl.bind_vertex_array(Some(self.cell_vao));

            let instance_data = cell_instances(min_x, max_x, min_y, max_y, limits);
            if !instance_data.is_empty() {
                self.gl.bind_buffer(ARRAY_BUFFER, Some(self.instance_vbo));
                self.gl
                    .buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&instance_data), DYNAMIC_DRAW);
                self.gl.uniform_matrix_4_f32_slice(
                    Some(&self.cell_projection_loc),
                    false,
                    projection.as_ref(),
                );
                let instance_count = (instance_data.len() / CELL_STRIDE) as i32;
                self.gl.draw_arrays_instanced(TRIANGLES, 0, 6, instance_count);
            }
            self.gl.bind_vertex_array(None);
        }

        if show_grid_lines {
            let lines = grid_lines(min_x, max_x, min_y, max_y);
            self.draw_lines(camera, &lines, GRID_LINE_COLOR);
        }

        let edges = limit_edges(limits, min_x, max_x, min_y, max_y);
        if !edges.is_empty() {
            self.draw_lines(camera, &edges, LIMIT_LINE_COLOR);
        }
    }

    fn draw_lines(&self, camera: &OrthoCamera, vertices: &[f32], color: [f32; 4]) {
        if vertices.is_empty() {
            return;
        }
        unsafe {
            self.gl.use_program(Some(self.line_program));
            self.gl.bind_vertex_array(Some(self.line_vao));

            let projection = camera.projection_matrix();
            self.gl.uniform_matrix_4_f32_slice(
                Some(&self.line_projection_loc),
                false,
                projection.as_ref(),
            );
            self.gl
                .uniform_4_f32(Some(&self.line_color_loc), color[0], color[1], color[2], color[3]);

            self.gl.bind_buffer(ARRAY_BUFFER, Some(self.line_vbo));
            self.gl
                .buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(vertices), DYNAMIC_DRAW);
            self.gl.draw_arrays(LINES, 0, (vertices.len() / 2) as i32);

            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.cell_program);
            self.gl.delete_vertex_array(self.cell_vao);
            self.gl.delete_buffer(self.quad_vbo);
            self.gl.delete_buffer(self.instance_vbo);
            self.gl.delete_program(self.line_program);
            self.gl.delete_vertex_array(self.line_vao);
            self.gl.delete_buffer(self.line_vbo);
        }
    }
}

/// Checkerboard cell instances for the visible range
fn cell_instances(min_x: i32, max_x: i32, min_y: i32, max_y: i32, limits: &ScrollLimits) -> Vec<f32> {
    let width = (max_x - min_x + 1).max(0) as usize;
    let height = (max_y - min_y + 1).max(0) as usize;
    let mut data = Vec::with_capacity(width * height * CELL_STRIDE);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let base = if (x + y).rem_euclid(2) == 0 { CELL_LIGHT } else { CELL_DARK };
            let center = glam::Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let dim = if limits.contains(center) { 1.0 } else { OUTSIDE_DIM };

            data.extend_from_slice(&[x as f32, y as f32]);
            data.extend(base.iter().map(|c| c * dim));
        }
    }

    data
}

fn grid_lines(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Vec<f32> {
    let mut vertices = Vec::new();
    for x in min_x..=max_x {
        vertices.extend_from_slice(&[x as f32, min_y as f32, x as f32, (max_y + 1) as f32]);
    }
    for y in min_y..=max_y {
        vertices.extend_from_slice(&[min_x as f32, y as f32, (max_x + 1) as f32, y as f32]);
    }
    vertices
}

/// Segments for each enabled limit edge. A disabled axis spans the visible range.
fn limit_edges(limits: &ScrollLimits, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Vec<f32> {
    let (x0, x1) = if limits.horizontal {
        (limits.left, limits.right)
    } else {
        (min_x as f32, (max_x + 1) as f32)
    };
    let (y0, y1) = if limits.vertical {
        (limits.bottom, limits.top)
    } else {
        (min_y as f32, (max_y + 1) as f32)
    };

    let mut vertices = Vec::new();
    if limits.horizontal {
        vertices.extend_from_slice(&[x0, y0, x0, y1, x1, y0, x1, y1]);
    }
    if limits.vertical {
        vertices.extend_from_slice(&[x0, y0, x1, y0, x0, y1, x1, y1]);
    }
    vertices
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, mem::size_of_val(data)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(horizontal: bool, vertical: bool) -> ScrollLimits {
        ScrollLimits {
            horizontal,
            left: -2.0,
            right: 2.0,
            vertical,
            top: 1.0,
            bottom: -1.0,
        }
    }

    #[test]
    fn test_cell_instances_cover_range() {
        let data = cell_instances(0, 2, 0, 1, &limits(false, false));
        assert_eq!(data.len(), 3 * 2 * CELL_STRIDE);
        // Checkerboard alternates
        assert_eq!(&data[2..5], &CELL_LIGHT);
        assert_eq!(&data[7..10], &CELL_DARK);
    }

    #[test]
    fn test_cells_outside_limits_dimmed() {
        let data = cell_instances(4, 4, 0, 0, &limits(true, false));
        assert!((data[2] - CELL_LIGHT[0] * OUTSIDE_DIM).abs() < 1e-6);
    }

    #[test]
    fn test_limit_edges_per_axis() {
        assert!(limit_edges(&limits(false, false), -5, 5, -5, 5).is_empty());
        // Two vertical segments, two vertices each
        assert_eq!(limit_edges(&limits(true, false), -5, 5, -5, 5).len(), 8);
        assert_eq!(limit_edges(&limits(true, true), -5, 5, -5, 5).len(), 16);
    }
}
