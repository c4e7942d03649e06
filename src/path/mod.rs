mod segmenter;

pub use segmenter::segment_path;
