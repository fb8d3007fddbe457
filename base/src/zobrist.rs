/*
  Raptor, a UCI-compatible chess engine.
  Copyright (C) 2022 The Raptor Authors (see AUTHORS.md file)

  Raptor is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Raptor is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Zobrist hash key generation for positions.
//!
//! All keys are derived once from a fixed seed and committed as constants, so
//! that two runs of the engine (or two engines built from the same source)
//! agree on hash values. `castle_key` is indexed directly by the 4-bit
//! `CastleRights` mask (16 entries), not XORed bit-by-bit, matching how
//! `Position` stores castling rights as a single combined mask.

use super::{Color, Kind, Square};

#[inline(always)]
/// Get the Zobrist key for a piece of kind `pt` and color `color` sitting on
/// `sq`. Returns 0 if `pt` is `None`, so that an empty square contributes
/// nothing to the hash.
pub fn square_key(sq: Square, pt: Option<Kind>, color: Color) -> u64 {
    match pt {
        None => 0,
        // `sq`, `pt`, and `color` are all enums with fixed, small ranges, so
        // an unchecked get is sound here.
        Some(k) => unsafe {
            *SQUARE_KEYS
                .get_unchecked(sq as usize)
                .get_unchecked(k as usize)
                .get_unchecked(color as usize)
        },
    }
}

#[inline(always)]
/// Get the Zobrist key for a full 4-bit castling-rights mask.
pub fn castle_key(mask: u8) -> u64 {
    unsafe { *CASTLE_KEYS.get_unchecked(mask as usize & 0xF) }
}

#[inline(always)]
/// Get the Zobrist key of an en passant square, keyed by file.
pub fn ep_key(sq: Square) -> u64 {
    unsafe { *EP_KEYS.get_unchecked(sq.file()) }
}

#[allow(unused)]
/// Helper used once, offline, to regenerate the key tables below from a
/// fixed seed. Not run as part of the build; kept for anyone who needs to
/// extend the key tables (e.g. Chess960 castling masks) consistently.
fn print_keys() {
    fastrand::seed(96621);

    println!(
        "pub const BLACK_TO_MOVE_KEY: u64 = 0x{:x};\n",
        fastrand::u64(..)
    );

    println!("const CASTLE_KEYS: [u64; 16] = [");
    for _ in 0..16 {
        println!("    0x{:x},", fastrand::u64(..));
    }
    println!("];\n");

    println!("const EP_KEYS: [u64; 8] = [");
    for _ in 0..8 {
        println!("    0x{:x},", fastrand::u64(..));
    }
    println!("];\n");

    println!("const SQUARE_KEYS: [[[u64; 2]; Kind::NUM_TYPES]; 64] = [");
    for _ in 0..64 {
        println!("    [");
        for _ in Kind::ALL_TYPES {
            println!(
                "        [0x{:x}, 0x{:x}],",
                fastrand::u64(..),
                fastrand::u64(..)
            );
        }
        println!("    ],");
    }
    println!("];");
}

pub const BLACK_TO_MOVE_KEY: u64 = 0xab07b30dee64cb43;

const CASTLE_KEYS: [u64; 16] = [
    0x63a613f2d84c1942,
    0x1888e6e73b30b7e6,
    0xd9142ee68f79dd0a,
    0x7d2280f3b70664a3,
    0x6db69631eef01e58,
    0x9373f43fb9fbc351,
    0xd5e73614df16ec26,
    0xf3bd4a4714ce09b3,
    0xd3b9c4c62babc036,
    0x575fc1b21a634855,
    0x151686dca1b1ceee,
    0x5d9e7b889877fc4e,
    0x85e8c6e4cd996a38,
    0x60a52f6f660d0d39,
    0x38f597739682d3b7,
    0x0c2d6d2a6ee43354,
];

const EP_KEYS: [u64; 8] = [
    0x48d7b47cd1874522,
    0x395021f9e8ce5a1e,
    0x2cc6be30e8901073,
    0xd08a7c9b49f35107,
    0xc7d19d03219c2555,
    0xd8c642fbba892c51,
    0x5680d79bd6e6c80a,
    0xdbb6b1c774479a0a,
];

const SQUARE_KEYS: [[[u64; 2]; Kind::NUM_TYPES]; 64] = [
    [
        [0x8b8075e1917f6af9, 0x2c4c75a44728385e],
        [0x156918ac9652c200, 0x680f616088883d63],
        [0xa5fe6c5ffd32b1cc, 0x7ab9b5251140674c],
        [0x733be484e81dd143, 0x5d2cfc3329eaa40f],
        [0x4bb2034ba396d16a, 0x92d92289fc0def65],
        [0x8a3a56d521a2c157, 0xb31643c78b8d7c7c],
    ],
    [
        [0x6c8f65c910c97f54, 0x434737b2c8f231ba],
        [0x9fd6699c5b963d40, 0x4ad7a3caa1311bbb],
        [0x57914532b3c13639, 0xf4c74be45fa5718b],
        [0x8ee9b1c8213ccec3, 0xc2a186b5d1a6babc],
        [0x73e255ed216c110a, 0x8fe66665594c09fb],
        [0xbd8d9bfb55d6c00f, 0xa465784564df8f2c],
    ],
    [
        [0x501a0672cbe30d24, 0x0b066aead892975a],
        [0xa5abf8c18aaabbe2, 0x08645ddf1648ecd6],
        [0x422403a387f279ba, 0x2cd2c4f3957c6fc4],
        [0x0a36518abb319679, 0x70e3a0c963eec468],
        [0x97a4e8f0afeb9279, 0x2f9d8165cb2ceb2e],
        [0x651682c86d3c967d, 0x729ffda4cdc72c6a],
    ],
    [
        [0x0f044b2fafb4e744, 0x2076d7bfc785ad1c],
        [0xa3f65a6ffd38059d, 0xb423abf5509bba54],
        [0xf5e231c923bfcad4, 0x8489f2d5d199bf96],
        [0x5a82f296d464f5f7, 0xfceb87b558726627],
        [0x9a7f338e5d0489f2, 0x54bff49d4cd583ed],
        [0x8bf7e5ed79b3286c, 0x9012c936b64b14de],
    ],
    [
        [0x98911db2c961abac, 0xd91afb219aee955e],
        [0x562f4d28cdff3f26, 0xcd36277c35fb8bfc],
        [0xf12873852302d25f, 0x92aafce3d134cdf4],
        [0x66e0263cf6cc7171, 0x023146d2e8f96dde],
        [0x6d9c212a2e56c316, 0x4c48a3382b8b5022],
        [0x8a17e1ab7a560105, 0x52a9cbebf4ab382a],
    ],
    [
        [0x139c68a38b9bd4b6, 0x0bbf2df25438e42f],
        [0x75ef2b7ee81146cd, 0x483455d22e0c47d3],
        [0x49272e1c7089eae9, 0xbe4d1e9edcae8e71],
        [0xb446dd45fe9ebea3, 0x1b68915000e457ce],
        [0xb79c33f29369f568, 0x7859300fe2e1d7dc],
        [0xa3202d3f6f3fba06, 0x7c37d9f47647c34a],
    ],
    [
        [0x361b7733ad6446e2, 0x26fe8f1d4bf7348e],
        [0x667bef47294bf940, 0xf4f150d7e8bd6ba4],
        [0xf6a90dc020d9c518, 0xe64b2e60eb7f986d],
        [0xe2931e763d2dbe0a, 0x0b6d164b63f8f6f3],
        [0xbca599018f325550, 0x8a5369198985f24b],
        [0x71cef6a59cfdd3d1, 0xf83f736c7eaa8713],
    ],
    [
        [0x4662ba0fecc8472d, 0xbe7a88e4cb393778],
        [0x75830f0a0b2d2412, 0x1fe6268164eb7081],
        [0xbf553d4f4c0e5316, 0x8ed5c6befa79ee29],
        [0x1658ab18e3cb06cb, 0xc5c21c90c91759e8],
        [0x26b254dae79520c5, 0x8e3dbdac1be01bb2],
        [0x16ea89daf2ef378d, 0x575cc16fff48c23b],
    ],
    [
        [0x2459edde9d15e5aa, 0x40c2b9abc5d54bb7],
        [0xb8ad3707d984d128, 0x97c178d7f9014924],
        [0xe7fdac20dfb1d413, 0x4fc814b99ed3c6a9],
        [0x38f1dc5bb0a594e1, 0x209c36309ab9bb2c],
        [0x2cbbbf10fae6e94a, 0xba7e8a6097ffafd1],
        [0x4baafbe6f6c4b00b, 0x036d6fba98ddee76],
    ],
    [
        [0xe621b6a4ef0cef1d, 0xff959a7d2a13e96b],
        [0x1b04e41cbe643346, 0x1e28ecb41d55996b],
        [0xcdddf533dcc4ac8f, 0xdd9109c5e847e022],
        [0x19583c021c408089, 0xee586f3d01ff2d17],
        [0x3fad4029b6f0ee4e, 0xb262951f543a7752],
        [0x6d5fedcdd1bff8a1, 0x90765de33b36b7d3],
    ],
    [
        [0x94184546a6dc688e, 0x296fd8d71668c90c],
        [0xe5ced3b5cf7ee655, 0x7553c7e288c76342],
        [0xf70a77f776f8aa74, 0x772d9acd7ecb161e],
        [0x60da516615c707c8, 0x05163f6d68b9cc55],
        [0x40232df0ab1e625f, 0x7100ad7bbd83e680],
        [0x55cd211e8cbcb3c3, 0xa9981a73d606452d],
    ],
    [
        [0x9b944e94cb769d9c, 0x7ecfabed93a34fa2],
        [0x04f78f54ef2262c6, 0x271be05ccd42662c],
        [0x7d2cec34b0e25e1f, 0xdcba611cd42995a3],
        [0x0936b18b22a21f4a, 0xf0227d2117585824],
        [0x7360998ebf495fe4, 0x105d801903f5305c],
        [0xaf88fb52d9822c79, 0xeec7a956da658c85],
    ],
    [
        [0xa5887604e4bcfc84, 0x44890c7fb812b86b],
        [0x5b78b6dfe7a7febf, 0xa1f02c6052f6d8ea],
        [0xb2946d0c9178f9c4, 0x4d89838e4f2feb97],
        [0x8e1521690e469c32, 0x5370513b4e474017],
        [0x48068a2881aa29e2, 0x0cba4e3ea680958d],
        [0xc1e43fbffc965b15, 0x017bfbb14a1f99e9],
    ],
    [
        [0xc6ddc9c88768e358, 0x90e810ae585adcc2],
        [0x4ca785b396863d9c, 0x15bc7e32a3284b79],
        [0xc17a84d7320319f2, 0xa3f03f95e9804b38],
        [0x8aea4defcbd1a7bd, 0x0ba58c3dae234bab],
        [0xe2ad35429767d702, 0xe6360f22b7131189],
        [0x6e67a54d7544ffb1, 0x10dc578e577ed03e],
    ],
    [
        [0x251748335c583b90, 0xdbd89031cd64c633],
        [0x12fd017d27cd5fd0, 0x2cf033c210a07108],
        [0xd7541c6ed3cc6539, 0xa6da840788bb276d],
        [0x0ff8635c7e62f446, 0x39fe381923c0ee5a],
        [0x0321aee157d3404b, 0xdfc4d43fa914875b],
        [0xcef9f542bacd9b07, 0x3e2f4df6c29de59f],
    ],
    [
        [0xa2e5d71d58e49514, 0xe9ce0ef46b890300],
        [0x64db69549ce26ee9, 0x6df415160fead9fd],
        [0x889598e282693d07, 0x49c0cf43a096e767],
        [0x81ca20cb63a77664, 0x9a15c95e420f229f],
        [0xe62de357cb5b60d0, 0x923594a6e232425d],
        [0x9cc9726862888a31, 0xe3f5351e46039d96],
    ],
    [
        [0x370e46d766be0713, 0x5906b7cb43d6d653],
        [0xd27b74351553ba1b, 0xf7103d8418c3e9d9],
        [0xfc26db058a6b600e, 0x29bbba9ffbec2f20],
        [0x4c8beadaf42386c8, 0xcb9c70db56440aaa],
        [0x756d96de6ba736d1, 0xfd1097a8dfd32830],
        [0xd378447ff9009a8f, 0xb6caa37a6baf5b7e],
    ],
    [
        [0x82e31908f0a21777, 0xf4fe38749615ffc4],
        [0x79a10345120f210b, 0xcfb1d407a494c573],
        [0x4cdf15d7db2c5b8d, 0x38b5700cfba8b9fc],
        [0x7b693e7f3439307f, 0x14e46be0be4cc073],
        [0x7c62e17bf75ca1d3, 0xd69812736d9a0192],
        [0xd1f7968cc1db1bc7, 0x36244cc5e6b6b40c],
    ],
    [
        [0xf65ea384890ae18c, 0xa4c60e2d89238189],
        [0xdd11cfb55e636f82, 0x3c73b9647194caa8],
        [0x4f57475edc3aeacf, 0x9397ba7ce87436c2],
        [0x83c8ea541cb48160, 0x3a9953e9fd19c79d],
        [0xb2ca1130e4cf75bd, 0x00884f7468801081],
        [0x18593bf0f695bd38, 0xdd32c40c46ea1d90],
    ],
    [
        [0x12827269695e1ef2, 0x6ff00d2dce323fa1],
        [0x2e80ba36b469d845, 0xa1cea038e6c60f80],
        [0xbd9067b4106dd3c3, 0x4520ba304e97bcf9],
        [0x2f1d3a3da0189c64, 0x949043fe3db02c52],
        [0x853f7573f1948290, 0xe89532f5d71abb0c],
        [0x901a975f53334418, 0x4b8d587791abcaec],
    ],
    [
        [0xe3472b4234fc9eb4, 0xd876125e7a25e6bb],
        [0x0da4afad20fcdff4, 0x7d5192f18093631c],
        [0xc1920bf9aa6fa5f7, 0x7c4163afdfda04da],
        [0xcbf4d5fc91046e29, 0xb0f1d7a835fb2fbc],
        [0x47fc2e2ae95b395f, 0x5f74157833c236ab],
        [0x51866abf499593ac, 0x88a5a487c6feaa22],
    ],
    [
        [0xa812c9fa84746f6d, 0x178d11fda18c490f],
        [0x46474be12f08d6bb, 0x4bd95efe7458c223],
        [0x508dc4d56861ab49, 0x6da38ba60e7c7170],
        [0x7b0d456a44ed57ae, 0x3ef07193ee26eace],
        [0xddb930e0697b664f, 0xfeb9c1d172ff5236],
        [0x6fc89846c0a11813, 0x6b545ede077cff74],
    ],
    [
        [0xaf201ee999de5b71, 0xf030a27d690ae76a],
        [0xd425bd85addb0f5e, 0xb5d61aed7171b8e1],
        [0x63743108b12bac2d, 0x29992f777b71cc06],
        [0x6f34e9d4a38d3f66, 0x4c75a57d1bd21c1f],
        [0x6dd3798f04bd1242, 0xe7489258c5ff2922],
        [0x584d131c0819e539, 0xa1fea0e30f367183],
    ],
    [
        [0xc6414338375480d9, 0xd596fd43f2560200],
        [0x07b00d3a6ba2a5e4, 0x7391db5f603b8e21],
        [0x760a4eb9b595aaa2, 0xe08eea0b6601f3cd],
        [0xa27f785514f37ed3, 0x7fea36a766a8bcd7],
        [0x6dda7175a05f48aa, 0x15afe6d51336e94e],
        [0x6fc5525f582a13f6, 0x58c54b4e08ca1265],
    ],
    [
        [0x2ca52cdf19f50792, 0x3df745e1f7a36aac],
        [0x76da19d081565fa4, 0x6f84c5a769042fdb],
        [0x8c1cbc21a91a2a5d, 0xa52a4a1fd1d953f3],
        [0x99c3cc9bf6873af3, 0x45b888d124a77bb3],
        [0x1e606bb9d23fb4f9, 0xa46e320e09fadf67],
        [0xded4f4573492b26f, 0x05a34383186b21d7],
    ],
    [
        [0xdfe27670ba73386a, 0x6268c11e890e07bb],
        [0xd663427f013447b6, 0x47149e7e0c212c73],
        [0x3eed9afbec128d3a, 0x91a91a3d91767728],
        [0xcee328635ad56761, 0x514c244c09625e87],
        [0xdfeb45aa70d49725, 0x1fc6777c8d9329c1],
        [0xf33b8a58b89d52bf, 0xd6e8d5e0e6888246],
    ],
    [
        [0x08e76cc881d44704, 0x5a032c72c1c540d6],
        [0x368d6d87e83197bb, 0x9203e70f3bd56368],
        [0x7685fdf31e88c8da, 0xc80068b4cb43fc54],
        [0xafc04e82111b041a, 0x5688d86413c1fd4e],
        [0x05e31c9dec91671a, 0xfb125add55805c54],
        [0xc786c9316091c560, 0xdf0eee81237bd4b7],
    ],
    [
        [0xfeccb0104ac4b5e1, 0x9aab3375c29fb50f],
        [0x8f67fd16029c34f9, 0x5611a311450e93e9],
        [0xde3c119f48c5f862, 0x25025d81636d22f4],
        [0x85e005da93d9ba15, 0x8e5cf62cf6343196],
        [0x409f7477f9f0520e, 0x26b237190925f3ff],
        [0xc8efd129711263ca, 0xe3658133d72783b7],
    ],
    [
        [0xb4bdd8cba348f64e, 0x37af888864d858ac],
        [0x44973e2647cf8c64, 0x7ebfa2918446e56d],
        [0x1d222aef99035ab3, 0x915624a33288c9c1],
        [0x291b6ce25ec7fc72, 0xca565bcb100fd0ea],
        [0x17dcd33d1674b6c7, 0x3e0207082452649e],
        [0xe33da9970607909e, 0x4e471caebd18c136],
    ],
    [
        [0x3fe22ab127fc25f2, 0x26f96bab4efea77d],
        [0x422680b3c9207bbd, 0xae9763e56f01cd2e],
        [0x827977e0ab459390, 0x808fea5fa59cd7c8],
        [0xddd8db99d2fb58b6, 0x66af58b0eac0c374],
        [0xaeed94eff7077fcd, 0xdc3e2363025dc422],
        [0x707ce295dd427e0c, 0xa43407d6b721be27],
    ],
    [
        [0x6192ef5d3ec310fa, 0x68a57e05219fec80],
        [0x6befc361d48e7b2e, 0x625c249884e4d08d],
        [0x3fed71b3bdf6f2cd, 0x5fef9a239952fc9e],
        [0x6fd8a96a8ac66ac4, 0x68f1a3c48dc081c1],
        [0x6c375958b1925a72, 0x0b6b0d0a8c02ead4],
        [0x16a9b5c5a77f513e, 0x97948c5879dd1159],
    ],
    [
        [0x048515ff5a47bf53, 0x25d60e0956b8994f],
        [0xc77098343adfb37b, 0x39bdcdf1f0d6b465],
        [0x74523edb8bc40a2f, 0x45306dc80863bfd5],
        [0xec92657e0a298fc8, 0x5423b579dcd48201],
        [0xa73a23c109f4a0bb, 0xf0343cceaf737a41],
        [0xd9841f168e81554e, 0x4c497e8a1b16dce8],
    ],
    [
        [0xebf58fef4711868e, 0x04737a31dadaeb07],
        [0xd5d9c52e77ed4565, 0x7c0657292b4a4f6d],
        [0x715d93c0a451acae, 0xb66ddd3e3a27716c],
        [0xb31e915ddb6336d0, 0x9f0953c9d71c53a9],
        [0x70896a9895cafab0, 0xada26f58c60b12bf],
        [0xb74d52cbe4bdffb6, 0x924791f8e053344d],
    ],
    [
        [0x0fde9c982e894b63, 0xb5e5cae82da4f840],
        [0xdfbd2271ded3cc02, 0x913ff1b0d0474e5a],
        [0x9b3c064ab01bc865, 0x0e11647e73cfd3c9],
        [0x42046e1a174d81ab, 0xe809542ac233c1a9],
        [0x5abe7d10e0cb9a26, 0x26aac1aa6ee8222d],
        [0x9c6f662a5acbd7a4, 0x765ce2729e8802ab],
    ],
    [
        [0xeeb8119c18e72eb6, 0xf0426acbcb1fbb75],
        [0x01633ff35ba26a16, 0x7a1f0df3f052351b],
        [0xfcaf8d28bdf0a6f8, 0xf13bc6dc191737cb],
        [0xb108a7fb0bf39387, 0x790cbbc87879fd51],
        [0x9635c6614dd3b30c, 0x4cb15a06a6793cd3],
        [0x6da549351f14724a, 0x5981ed120e8a274c],
    ],
    [
        [0xfbb2ca04a14f6857, 0xa289b81dee05681b],
        [0x9056ec2fd47c2361, 0xcb37bb43d03aa9d5],
        [0xaed284c0207399e1, 0xd66f802fdb9d94e4],
        [0xf4b0833fd744530a, 0x0b05b20fc4c8fc1c],
        [0x405559a64731a689, 0xbd9437fa60f9c6b2],
        [0x85a823a85eee2824, 0xe471759c4943dcd2],
    ],
    [
        [0x372562f5f7d478a7, 0x3bee588052be112f],
        [0xfc27aa449b58aa99, 0x3ab5f88c28eb7bb1],
        [0x463af5782b84fa6b, 0x7a14e18043f14bbd],
        [0x9138a352633fe7c4, 0x56b521bf6f35cc4f],
        [0xb44d33499dc01b43, 0x6a1554e9bb72795d],
        [0x7a50e0a4a6cbacd4, 0xbc47435b0544bd93],
    ],
    [
        [0x75a0211f1c242bd3, 0xc62de5b75d41d80d],
        [0x3a8e5de2e7c9779f, 0x21a2673559f9b886],
        [0xe4335766b88b1c06, 0xb47655b9dde4a90a],
        [0xa88dec897d681794, 0xeaa1c7ed02a11856],
        [0xb603aca539d5e314, 0x355458eada679d69],
        [0x46950cc87075a0ab, 0x88c9e3e4916b2156],
    ],
    [
        [0x7f606c8fbe13ea5a, 0x5e5212e58205b231],
        [0xbd51c47ca4508f9e, 0x06624f83c760eb17],
        [0xf3afeefc584fefdf, 0xc0151b194d0d3843],
        [0x9a3c5a0e984e6e65, 0x7f4f32e24fa7df86],
        [0xb4728ca4a397dc8b, 0xcc9ab47f63c3e771],
        [0x93e79328746fe94f, 0x030f2d0af2e152f3],
    ],
    [
        [0x61fd6498054ef90a, 0x7fdb7ca420ee766a],
        [0xfdb586c166fd9c6f, 0x6e8f84c625ef55f9],
        [0xf6f5c2fea3d65932, 0x201bada88cd47e1a],
        [0x92d98dc9fff75f67, 0x757e6bb6f368aa9c],
        [0xd9fe68ad9d04f526, 0x905cb0d709a62cf1],
        [0xf1ea0949b6d66cde, 0x1106aebe992a1b47],
    ],
    [
        [0xf19d69aa448e5e84, 0xe13ccd8839c32062],
        [0x7c42a4544e39a3ba, 0x72f13c3861f3e31a],
        [0xedcf1375906dcc69, 0x2d2677ad6f7fa8fa],
        [0x1c18d032df113bcb, 0x9854a98f5077c49b],
        [0x71a4527f8cd27588, 0x7fb780e9621edb7e],
        [0x5d190c17c823cfb9, 0x906a818e7a352b3e],
    ],
    [
        [0x166244ddff7c221e, 0xbc33fd6217ba6b55],
        [0xd7f2fdebad1854b1, 0x699aa706a70bc3bd],
        [0xc9300a09b51a1ddb, 0x81eed47e7158a6de],
        [0x75585ce9d22358cf, 0x280e2f5790b82967],
        [0xe1728182adc80344, 0x0359c8e503fb6d4a],
        [0xa05e41302ef2af4f, 0xbd8b0d34a9f504e9],
    ],
    [
        [0xe13614f0a29120fd, 0x9707812df5c5ac76],
        [0xfcf0b3b5b2d327d2, 0x35254f9a5a224298],
        [0xcd5eb66a51e71867, 0xa30ac5e3561e64d6],
        [0xcb4f77eecd152cd6, 0xdc1183e7c236fb02],
        [0x6a8a4b42430081dc, 0xddd290b03da4b7e0],
        [0xa7ad035b9627e055, 0x49cbf6656579dc89],
    ],
    [
        [0x531b3883d6546e9f, 0xede3bee1acae3766],
        [0xd442ba6506758df4, 0x3f997c9a662a7abf],
        [0x473132ceb7b0d7ad, 0xe3edf28cb60c4536],
        [0x5aac45a021b26e05, 0xb02f1ff76d066eb6],
        [0xdb280fbf80278d1a, 0x32b35cb0e5766c83],
        [0x2651e3c3af4f81a1, 0x9a2072ddd630beb8],
    ],
    [
        [0xcc6051f7a6461ca8, 0x2a3c127a6b7d3c93],
        [0xd4a25a43053cd7d2, 0xa204b6e7bbb375b3],
        [0x75df2a3662613508, 0x1dbbe0457b53fbe3],
        [0x6848746c11826912, 0xcb6f762b038e4f3b],
        [0x09c747f3de5e54a5, 0x4d3447be48bb3cc2],
        [0x6822b69e7f1a8288, 0x9cd59fb50e469f85],
    ],
    [
        [0xe14ada2a3a419ba7, 0x3a6036b28e46593e],
        [0x8c06cad5d1df95c6, 0xe8d49a4688169b36],
        [0xf330a5a9904636bb, 0x65b81e8d1c589763],
        [0xe52360d76e48459a, 0x4b0a09fe085586ca],
        [0xddbc31012e2539da, 0x342fb5a254c9537b],
        [0xc4e7bcbb17141996, 0xa39e0ba01ff578b2],
    ],
    [
        [0x32cefee17fe880a6, 0xcf71e1832f5e1d24],
        [0x4eafa9b6e68c409b, 0x8e5f384737b6cc13],
        [0x2bb733f0dca144df, 0xf12bf8ed9810f9d1],
        [0xc14c5eef397221eb, 0x24fca696d9cdafcc],
        [0xee5169c8fb5f273c, 0xa0498a92b7ae9fed],
        [0x5d1c81ba4d1f77c2, 0xf3440f2718e24102],
    ],
    [
        [0xa27659d567de066b, 0x5277eb0063226a02],
        [0x7ff3639f9bb616f0, 0x30711c4252aae711],
        [0x7ebbef5c19091b9d, 0x37cfbb6e1b5eebaf],
        [0xb06072821b43455a, 0x21fce1f477fedb10],
        [0x6dad66a05e6bcbbc, 0x34414c01a959a6b2],
        [0x15e159ede656c758, 0x78722969f1f715a4],
    ],
    [
        [0xbb0f01715f23ccd0, 0x1665beaac8616c51],
        [0xa8e1dfee4b7b5620, 0xda94ee4bbac5d624],
        [0x1215b723c47ac765, 0xe1a10ab345401f18],
        [0x25ed629f74d4e9d7, 0x702dbc64365678be],
        [0xa6181923a43fe857, 0x6620235949e66d10],
        [0x199673edec8a2726, 0x557e7243cfe42250],
    ],
    [
        [0x86e4adf568d9221d, 0x7ce90692b7d1e3c7],
        [0x00dd193141517d6d, 0x955df61fc8c809ef],
        [0xfe09c6e945b4b44a, 0x7e04b411f7f1f617],
        [0x133dd06abc4ae23a, 0xba34f6eed0c17550],
        [0x7a2d06a53bfa7532, 0xb9526c91ec74528f],
        [0x35c783bf57d125ec, 0xc71531b490945ef7],
    ],
    [
        [0x553f3f6bc1a0dc6e, 0xfecf0ab72f97d178],
        [0x147f6de2a89faacb, 0xe3ed34ce6c912fca],
        [0x967737e5c3e3f8f3, 0x6bf3d0140ce5370e],
        [0x73923adbc8519ee4, 0x4be2b0b490372235],
        [0x7fc72a0b295f0959, 0x8da93c92b7ad2d08],
        [0x6053b573591a3772, 0x85e7fbc54ccf5e83],
    ],
    [
        [0x1c14b1f92b090bb9, 0x452e464096aed874],
        [0xa5bdafa644259fad, 0x9716d7a9eb022ca7],
        [0xcecb49dc3c9729eb, 0xbadeeb04b600a53d],
        [0x6d8bb1caaea1de38, 0xbc9725cb61f4815e],
        [0xb1d7213e2f0eff2b, 0xc28fa6f15ae0b824],
        [0x564940315089ba9d, 0x28f35a57b7957120],
    ],
    [
        [0x85328e19db82d8e5, 0xb4c0f27ea2e63da3],
        [0xdf797cd968ddf2c5, 0x19c22d5975021a83],
        [0xabc4fc2d0f93cdfd, 0xd354faf1eee4dff4],
        [0x219e503c9e30b0b9, 0xd8fdcc802de49983],
        [0x076ade3c7f184701, 0x4654813f6303a8b9],
        [0xd7845e6960747377, 0x896b96d24a0f319c],
    ],
    [
        [0x42461afb05805d7a, 0x072ca3778297cc76],
        [0xa9bec32dc340f702, 0x73dca22581b6ae7b],
        [0x464afb380043fd4f, 0xe0e8dab282114ef1],
        [0x5739114f40e84804, 0xf892c200a7d1c255],
        [0xaaf331f1a571e01f, 0xb40b5ed510655d2c],
        [0x162d260346c346b1, 0x28bef85a33cc9ae4],
    ],
    [
        [0x448e1ab6ef800325, 0xdb76dee4c7d71a3d],
        [0x78ba9ab5475ea314, 0x8efac900a1133ae1],
        [0x91fd775323c72e3d, 0x61f0286a998ba319],
        [0x8cd9abad87f98c9d, 0xd41e4cd2b89c7722],
        [0x584a2c2ddba084d9, 0xcd2759e5a767adee],
        [0x2b7d24db688a1feb, 0x183aba098dd31b81],
    ],
    [
        [0xaafac4804b4a29a9, 0x191598e5507b9b68],
        [0x149744d2ba4b6c61, 0x4e1b767c8169f99a],
        [0xfcf7e3ac92118a70, 0xdc0f1e5b06f10f8c],
        [0x93aaeab248798ffb, 0x0d9eda597275dfc6],
        [0x1f1afc6babf61a4a, 0x9c9f257e2ac90254],
        [0xbec16052705caf86, 0xd8d9c6a4cac020f3],
    ],
    [
        [0x48d3603870beb006, 0x429b0f0b4eb70712],
        [0x4ed9b46a52ff1be7, 0xdbf585e9f2a374a6],
        [0x3416c29343f02925, 0x50adc784cfba67bd],
        [0xd759cf4dde873aa7, 0x5ba2187ebe86a589],
        [0x7b24fc98a8f2177c, 0x5c0caeec66ed2f44],
        [0x52f337d3cc01f74c, 0xec2509abfb9544af],
    ],
    [
        [0xbf37625b14c0310c, 0xd800908971057e3d],
        [0x0b94de29529090d2, 0x1a540cfe364d1d84],
        [0x574db3acb0b6e5d6, 0xcbcaaa8215c92d45],
        [0x63b984742b07cb97, 0xcad016a9065f8395],
        [0xe25ef8c579afcf7a, 0xbccc8ef6bbeee6b4],
        [0x99606c469e80fd7d, 0x7c3c70c8c5340413],
    ],
    [
        [0xeaa56d1ad7ec155f, 0x36319052e00899f2],
        [0xd521f077715f1597, 0x5ffea5a67126dfc5],
        [0x48db3064417fe7dc, 0xae7746fbebce79b4],
        [0x4c0ef78720bdbe2e, 0xc8e9952bd0ba620a],
        [0xfecf2df90b62594a, 0xf7fe7fd4d718c896],
        [0x67d1b53acab93049, 0x213e7547c39f3983],
    ],
    [
        [0x04ac84d691be13f4, 0x11c33aaea54d93f1],
        [0xf90a0f7c1d19256e, 0xa5a306c85910e3be],
        [0x0a8dd36c63708710, 0x6ab5fdde5be60cbc],
        [0x48b88c2887dce517, 0x7ec09e1fec4e644a],
        [0x308a61c72848cfb9, 0xb0e494705d9daa1b],
        [0x962eb6313fc4d151, 0x89c11b07a2cec4e9],
    ],
    [
        [0xc36e9eba711ff6a8, 0x4261106990a86c82],
        [0x45c8a19f5794f70a, 0x1c6ed6a4192bcd08],
        [0xc42a50b42d638ab7, 0x1104b14772bc1fda],
        [0x09fb7fc68c014929, 0x09f795ac83e065f6],
        [0x0527ecc87231c7fa, 0xdd6c6a92798bd552],
        [0x5a2b6089200cce43, 0x4300911b1bffb73c],
    ],
    [
        [0x080583266b4d2746, 0xa7e21ee6b896e154],
        [0xb6ac4c5378027bd6, 0x91a2ca2012cf37a6],
        [0xafb453a030875338, 0x18c31ad16e59fc27],
        [0xa4f11331721cc81b, 0x13e393a11984e581],
        [0xabea36368f2d80d5, 0x4b0b86d428f8fdd1],
        [0x2118fe830df73109, 0x70192853ced9ae9b],
    ],
    [
        [0x4d943616398479ed, 0x5650effd09ceef31],
        [0x701981336957ab1c, 0x0561e7bef8b1a89f],
        [0x7a6a352c48cbe308, 0xcdf5f0224a42b8da],
        [0x2cd2b9ef6bff161b, 0xe8611a5a253a357b],
        [0x942015d76cd669da, 0xd5588673635acd7b],
        [0xbc7efac2705485a7, 0x998c5cb0ff117be9],
    ],
    [
        [0x1dc1ab766ab63dd7, 0xe401bb7c0bb919d4],
        [0x0018670634ab9ace, 0x1007c312525d25ae],
        [0x79d72ed2c8716b68, 0xe1d8e01d90b91640],
        [0xdcf8ad096e170e8c, 0x0701e8ba1905619a],
        [0x16296b9e7b9de6e7, 0xab352a935cb24fc4],
        [0x9820b5bc5fa4b333, 0x49aafd2fddd19209],
    ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn square_key_empty_is_zero() {
        assert_eq!(square_key(Square::E4, None, Color::White), 0);
    }

    #[test]
    fn square_key_distinguishes_color() {
        let white = square_key(Square::E4, Some(Kind::Pawn), Color::White);
        let black = square_key(Square::E4, Some(Kind::Pawn), Color::Black);
        assert_ne!(white, black);
    }

    #[test]
    fn square_key_distinguishes_kind() {
        let pawn = square_key(Square::E4, Some(Kind::Pawn), Color::White);
        let knight = square_key(Square::E4, Some(Kind::Knight), Color::White);
        assert_ne!(pawn, knight);
    }

    #[test]
    fn castle_key_distinguishes_every_mask() {
        let mut seen = std::collections::HashSet::new();
        for mask in 0u8..16 {
            assert!(seen.insert(castle_key(mask)));
        }
    }

    #[test]
    fn ep_key_distinguishes_every_file() {
        let mut seen = std::collections::HashSet::new();
        for file in 0..8 {
            let sq = Square::new(3, file).unwrap();
            assert!(seen.insert(ep_key(sq)));
        }
    }
}
