pub mod coloring_canvas;
