use crate::objects::{ObjectId, ObjectsDomain, ObjectsError, SimBody};

impl ObjectsDomain {
    pub fn get_object(&self, id: ObjectId) -> Result<&SimBody, ObjectsError> {
        self.objects
            .iter()
            .find(|object| object.id == id)
            .ok_or(ObjectsError::ObjectNotFound { id })
    }
}
