use crate::objects::{ObjectsDomain, SimObject};

impl ObjectsDomain {
    pub fn update(&mut self, elapsed: f32) {
        for object in self.objects.iter_mut() {
            object.update(elapsed);
        }
    }
}
