pub mod face_overlay;
