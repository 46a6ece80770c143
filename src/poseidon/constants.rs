//! Circom-compatible Poseidon round tables for the BN254 scalar field.
//!
//! Tables follow the optimized permutation schedule: `C` holds the compressed
//! round constants (`R_F * t + R_P` entries), `M` the MDS matrix, `P` the
//! pre-sparse matrix applied by the middle full round, and `S` the flattened
//! sparse-round matrices (`(2t - 1) * R_P` entries).  All matrices are stored
//! for column-major access: `out[i] = sum_j state[j] * M[j][i]`.
//!
//! Generated with the Grain LFSR parameterization of the reference circuit
//! (field = prime, sbox = x^5, n = 254) and cross-checked against the
//! reference permutation output for every supported width.


pub(crate) const C2: [&str; 72] = [
    "0x09c46e9ec68e9bd4fe1faaba294cba38a71aa177534cdd1b6c7dc0dbd0abd7a7",
    "0x0c0356530896eec42a97ed937f3135cfc5142b3ae405b8343c1d83ffa604cb81",
    "0x250f5116a417d76aaa422952fcc5b33329f7714fc26d56c0432507fc740a87c4",
    "0x264065ad87572e016659626c33c8213f7a373b9b8225a384f458d850bb4a949f",
    "0x2bb8e94ad8d8adca6ce909ff94b8750729b294e4400376da39e33fda24bd42af",
    "0x19051065d05d861ec813c15291d46a328f6201b21ad5d239d4f85fbb09a5dbae",
    "0x245bd0617aa449618f5bd4550aac7b8e08d4d1c017165943cdf4776cdff3434a",
    "0x09fb1a1118074ff79d8acbf5b02131e048a1570155e0f2b1c36ad091d491a88f",
    "0x234ab504bbae8198972741952f78b7eb018ea192f05e54c1484ab8973ff66d88",
    "0x01f66e509b84c355ae3d4c3513a282fd48f9c8c6439f42a7835fbcfe0f2a324c",
    "0x1b22f5d69d725e6002cf00dd9ee62d1a5af0efdc4910f54127a920ccc43f91fa",
    "0x0252b55edead135f852968b7f1c4f490fa659ecd5b47a78a7db91f65a6dfc23f",
    "0x1773ae2e1637c92ad0677c2a047fea8eca4b53303f21871f6892a2c0487d7ff1",
    "0x2d57b02906cd0ab82a79e76faeef6f87666eac093cf7715645d5ec9f7ac732f5",
    "0x0a16f3a62824b281e8b2ddb8fc391a498fb061317faffa03696f834596313d93",
    "0x1666f525f7f4b6988d2a37834ab747eae0587757b788eb7f1e26b08e36a08591",
    "0x05da44f8e0a3b8bb13231f0ca25b50b57f5c82128e1dfec3e541d912ebe17b76",
    "0x09a39ba9993303ba191bac8bdb3e0144dbfb5f39624cdd9524dc7861633bc95a",
    "0x06c0fb824a19202d30ee6b418c0029e100e85a6d158f9f2a828dfd2ed0920a68",
    "0x0387d8e056b2b176a9776b4492cb3b418adc660627e52bb3324283bf9522395d",
    "0x147a1af82036ef5b28a7a37bea40d6ac3013cf1b62358396bf7156f5c2dc9684",
    "0x3038d92060daeaaf1bd0482bd3f0613d88e8dff90a7a0525f9227e4cb7c6f81b",
    "0x072940aa1d538a5a39a323f9e5d65616cf6c223339006f9789a97245532908f5",
    "0x2d3d604949f4e14c70b8a879aedec49b3a367ba216af048f464ed6f15e2b9023",
    "0x225b9e4f35c7549f80774c2b4d18309b2dcf7c7287b982e49746a176641e73c5",
    "0x1ea781288fdf13b2190095a2344828e37dfe81c75a09709f0d139bbbf6c70414",
    "0x08e96c3e7e8de4432b202405458468b90dc6890d4cee128b3502e5b6cb4aeeeb",
    "0x05b43da7c8aa29af6dcaae57d070b49d29ce889a64a4ac183e85d55b366c805f",
    "0x00bec98a034e3b8af7ba4861f1ad5a48dcef7c996e7a51c7cdde724d8f610e52",
    "0x2eb67ccfa29e2b422b9f84a5d0575fc435b30fcae303039480be384ee4ebe72a",
    "0x102bbdc21a3f147bf04eedee5d70bd084a7105c631c86ecd2c4e8749a13915ca",
    "0x274bc16c88721babfd5bbe8d8562c1bf127ae38915280fbb8e3115cad3582f79",
    "0x185cece417549b25283de04511f769101c8850b409d4928ab831611351bd9938",
    "0x13c73fb043f7e978bc9cfb55c7faacb4f4c823674abe17737059ac0a32c36007",
    "0x24b3a1d83308742b360c9c60595673e201cdd4cef5a4145c933c4e5969481d70",
    "0x18b5ae94df9ec97aaa2a8f0f42425bcccdc8266a070f866ef0f48d7a3744398b",
    "0x20eb398cb958cc2ccc7cb1fac38501abbe38169b2d8522d9e5f099f2d5905cb4",
    "0x1e588dd3ec8b0d252c2c7c0c78a02b22bbbad1f4dcaa2e78a8b8eef2f4e29344",
    "0x0f8bf3bd6c22ba3b1bf3ab2e3fb40818cd4217ffbaf294ca42331d4e3043a0a6",
    "0x0388c9fcf30fc2841d648f46bad01dd10bee9dc184d25eabc9f617021109cec3",
    "0x2bb7f397c5941ac67befa8b232f15c8853dac263da793555441a90cec83b6454",
    "0x17f389b52f9ea7a98874a4a31ef6a7beb43fb17db0e499250bb3f0181c59fb21",
    "0x03a2090eacb897a31fb10561d560a9aeec24b7ad14d17b145f20c875a0b28c7c",
    "0x0c398534f0eb580f1fe4bf64553389e67cca4714399430e09619dcbee17ba099",
    "0x07095ac9fda46afa7f181259e3635feffa7f11ee63f3ee777a5cebf4822328c4",
    "0x2046f7cf1c8f13ef2b69cbc8bc0d5d809f82568abe2b33d1cd060958b1ced683",
    "0x2c274136a5de2849de6e7f92f9097296501acb68d56138fbcb660c4cb0f69107",
    "0x1c4d5178acb5c6b6eceef23afc6f16ec7b0383094cb6467e8d0f4507b3cf74c3",
    "0x065b1447d0d64ceced116785b92c63a6a7dd9701507dcbe8b909325e28f7b8d3",
    "0x2265d7e244881220c81a193d979330409c9bfa333438951340e023e7b72a1961",
    "0x15b12b355af7e05637a1c76e67f9cec6fca8a6449b37669f6850502256b30aba",
    "0x1a1522fecc6ae028e4d3e3029497b88f35c2b48c687af168ec2582d9075b4387",
    "0x22f56e79e81b7496e472a641a053c414bcc53b0a9350e2589240803076f58f26",
    "0x202ddb66d0988994e7aabad692ceac4e2324672a17ab8417d1ee278afd17fd0c",
    "0x12b0701e8813c5b21a8e30208f8f1158b96cd428ae77bdea72f84510f73edfce",
    "0x1e63fd20e706e1407c8838ceb26b84c9fe693fdde0eb1e1a9df7e84e53eeee7e",
    "0x20a16c5a86256deffd15af174c39f9d9aa11500676ac7e570088280dd1896259",
    "0x1c8f8bf8e153da55ad5aca2eaaee38da563e0435c0f2f37c27558fb9bae0a3eb",
    "0x0d7732687bb7bf5f3aabcfdcc4fbb67e159c1983213e416c3880124fddf187c9",
    "0x0cdd04475a86999a2edcbbbf8264b195e108b3b60b6475d835f6ccef9e2f6865",
    "0x2fe65586cd4e754b4c63a88c2ed3f9ba0e3bfa43f547b41153560c214fe3cbcd",
    "0x0503cf963c8273604e659128ec29261f62399815d98c56dbf4f2837c727ad4d9",
    "0x1ee48ea27839061b78379936f6d97ca9400b393ef5fdf38ef1475c8742cb334c",
    "0x1a423f8d8fc892b22d7cd5bf0197c575c579e83563d04859d73b2c1c5c0413f9",
    "0x069a0da50133e9952f00e61778972a7be0e8d8ab76c95616ae465636abb97ec7",
    "0x1bf7879dd42f2cbb91c65a0976356f67964c2f94dfbf0e44cf2b9909165d8614",
    "0x1b23dccf485822065c8fc0afe610be7164e25056267f6c4a805fffd4547a0b98",
    "0x2ebe90d6f6fdca420e0c2e004ce5c5a4409e564c9c4f3671e3011f627bec7c2e",
    "0x167cd6930535a816dfebe81d20c376e77687760f3a2fa0da290b2f4d6c6863f7",
    "0x08865c10f4a633c54ccc8b68b79df285f19f1210374cc64e3c8a966d4f90264b",
    "0x1de902fbc0bf01951ca25abb39d78894721b37e071851b03a72cc6b833b7893b",
    "0x0e3eca007699dd0f852eb22da642e495f67c988dd5bf0137676b16a31eab4667",
];

pub(crate) const M2: [[&str; 2]; 2] = [
    [
        "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
        "0x0cc57cdbb08507d62bf67a4493cc262fb6c09d557013fff1f573f431221f8ff9",
    ],
    [
        "0x2b9d4b4110c9ae997782e1509b1d0fdb20a7c02bbd8bea7305462b9f8125b1e8",
        "0x1274e649a32ed355a31a6ed69724e1adade857e86eb5c3a121bcd147943203c8",
    ],
];

pub(crate) const P2: [[&str; 2]; 2] = [
    [
        "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
        "0x20e3e914631964e394d269ae59f17efee3fecee512cbb163d32cc760be574bd6",
    ],
    [
        "0x2b9d4b4110c9ae997782e1509b1d0fdb20a7c02bbd8bea7305462b9f8125b1e8",
        "0x10a44ed9dd9ce568563394632833d8633690d329ae737c8c7220a9b197ee3f46",
    ],
];

pub(crate) const S2: [&str; 168] = [
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1fd20dcb58503896fd52998d6a5be6f12ec33b3cbd590c793e45de825ff8cb5f",
    "0x08c8295df0ba11861e97f0cdde8f202a7096c1e6452d33d64a11b5be4e0a1efb",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2458ee6d7c526073d165d2b08b95cf8947e20e05a76bc12b401b996421e89835",
    "0x18c235e6e723390aa65baf06ffa557829f78a2fe1fbfb44eef84e938209c92f9",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1868e106689f8ea2e9c561b4b192899d07b52e58595c393436c37df24976a584",
    "0x2d5161804f0ec6445cb8904ad3e8e9ec21153350df4075c9cbe840b7b609ca92",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x03510550ddf6292355c690f03b9b815aab2dc3f4914612da7ecb79ddcf7b0b90",
    "0x09a2e7bb3b278a1d5f264a26345ad8365efe0058403d8a52909cf2d5f6ee6170",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x13dd4148c491a166b015a7a4233f4e488ae94a0e6439be66fe149b50b55759c0",
    "0x1d2d3b261f5beb3fc010f42ec3825649d90150eee4ce55dc9f86ddf110295550",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x221b4477678dad4e2abcabb47eb5e7a4129190b3855ae4eecd8ba68643ff77e5",
    "0x16b76448e9855f165f2043f5f09bedf1830a4998ff45ebc25f1d40e8e8fcd6e4",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2a10b6a2cbae9578142cf66104b69e448eae6d3bd53ac8602363460e2286c92d",
    "0x2db84dba4a9d96cebe94dfb1d59edfa58ccfa871b9c067c522e31949b69f2bec",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1ca9bbf26402238296ad897ec1a55b4fc273cf20c1f68f03d5c149be890e7b60",
    "0x283d37fa5e35d25c83d1b9d34ecb00cd03848ca730ace52f367e0d7b5fde30d6",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0349057941b141ceea5a063a0ff8ab221271e618a174e5d8009ab5f9c791d960",
    "0x1af2e1d98c3c09908503883d3b9ed50fe8958eb1e5d6538016c344d40070efc2",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x05b7bddacf4522b0aa3082e2c05448962743d0023bb6402291f592e6c1da4679",
    "0x1fceeccf337e8a903cf6a0c21a6445da7ff8c4a0bc78909c7e704131c8a35241",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2f30a25f4d843e28afdd850f31d1920ee058dfb6d91c322fc960473e917a6768",
    "0x1a55160bf49a4936bcc59162617026194574a89e5857751b68f3c08f7c07ce87",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x19c66ee887ab4763b17573b6ad192b7df1af24f54761998b03b342b95709041e",
    "0x1a82828b7f87eba7f5f8624b31e1115506ab3e723266777b3789c9104f9c781e",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0f506d3199d96083de9fc4e71b250825e84a242d81ae3a81d99debc7faed3385",
    "0x1cac7482d91faef657db9072a97567ff172374d99987a8b24b2c04472aab9f83",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x249b26b1d4e333b23f3192f0e4f52884ee63d489ee153ecc3216939a72848150",
    "0x13d1aeb10b225e2a8b97131154407d1bf145972dcd3a0073339dca336180dfb1",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0b90f72b7fcf867eb2e0f9400787d1dd52720cbc14a7095784e4116624d16df3",
    "0x025e346edd8dd55142abd2135951398230f0c8d08bc5c365c5a6cd70011a8f39",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x263003b8ed502577c6427b0b4589ef6ceb87b4e21b7c424e587f2630a7b868a2",
    "0x2d92ef6b8bdc53dd1b6c5b1c92e5a8248eb9c12255b910ff89c09961ec12ead7",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2eb36b6d0bfc593a8d6d9459a7af04f0b15bcae4181bbb123543870c11316681",
    "0x1e48bb591146f461c1d2f085f3979139e37f4a5c2354952c833b2791f59034e0",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0e759913751418871f0351ee180ca466cf8a03f541079c1b51bb001550d8162a",
    "0x1e45e194b16936c5b1f81c72eb0fe8c62e859c4661b14b7e327503cf49eca55b",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x28c8b58c9e4cfb830a51af4529318b6269c4f6ac1867ed1174ce4aefc57fbeb3",
    "0x255b293fcb1be27d9e5aafd4cd28c26746fc3520889367eed1355c2c41b93016",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1db1367a8e37c5597835365bbfa66f6ecf40da775a54c35d5c94da70415544fe",
    "0x0cdd97951c2f0b885edc683b9db74f08df61286578a69989a9fed7ca34c5b4ce",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0e4d4e42cacb9fa6745c6dd3630ec5a4cca8a912b7ec28576ab3ba29c57306c9",
    "0x2141a925c279e4c4e351641744750d4702d90ef2137d1905dada0bae3c7b3af6",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x08f9f9b3abc79ed89c20597cfbfe49021119cc50648ce401dc50cb042a54d167",
    "0x06af6c072313d868cd945c9f0eb7d4eadb24c8d4763fa042952b99353df2b236",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x08b43c97bf4a40b4f376d1fa0c5e6e6955cbf9ba301f878ed3eae4ac812b79d1",
    "0x11e0e607ac6781ca34a714e6c5b7a4f839852377446520032420e2abe16115a7",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2dd7f0e1b303f425cb7e6b1c30ca428b3bff751e7b651152eb4de008b2c00da6",
    "0x107d7f92d1c6a24068b917120f993ae3ee84349aaadb71eaa4128b349812dda8",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x10ab9e8e4ec9ad5fdb1166c64ed2fc3223c7e16dd982f66dcd820a7861ae1463",
    "0x3000d3b3ddb3fb864ccc729984468a7317397713303544a84d7de1d209d25cb1",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x17610359e624e7feb3eede8099a1dc45c4a0c6b2debc2dc8f200fa27a0da6ebd",
    "0x2affce5b7a7d8c5aac04f6c2708794cd01a8439b65d74df5982d24ad2a944eb8",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2d439fbefe8d2b65ed32658bd21fc5604408d5fb69e1f64965e5895ca61c6e09",
    "0x0b51cc2a1b1c329fd72a286d4938540db3cfc4320de363a3f68a7935cd193ab9",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1468ea2868d31f7ebafe78af8c24656a3185963272f34c51d5e2695c43bd3247",
    "0x29553949324f27f4fa7bd734920e9be7b662a0ec5797fdd4ed3fe19464879b95",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0d9780ee7d395f7c977fd4b86329f6cd720047a7f9d1672d18d2cfb428343afa",
    "0x210a098afd451fca3997860e220106c7487f4716831dfff78036de18f17cb31d",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1cedcfe2751b360e73d6ef5af88cd5b75a2b2d97c571889a0dda87a0dd90ad81",
    "0x22719f26e16723c1bd45a619e91836c340a304f3648672f90de2b047880aee03",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0ae0cec959c4c7859f670f19c7490f8eef6ad66346e04613c1350597be000be2",
    "0x177560de731482bdb7316c238bc38f20a16cd03edda2e0393b1c515ec64b0727",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1f19a267da0b8fc2b4850a4f458add5514edf0aad6f7a7f175aef0b98e816a40",
    "0x1da77cdeff9cf822b54509031ea2888f6f398051ae1870afd3770e7724c09f31",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x02d1e17aaaa96743665a869970255c267ba338cfd43ec9b33ecaa764f48f17a8",
    "0x0c376a8ff1da39dec980316ea26ef66fae5c86877a8f82266c14670024329d12",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x00bb856048ef43a77b39560adeb3c7a9a783db5cad8e3f422495a69c56680a79",
    "0x1d81808a3c73be1bb2c99b6403f3ac4a532c88d29ad652cbb20061656006c19a",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x15e52ae83a9db363d24cc5900df8ff0b81e445d4409a0e2aafd3223c354add62",
    "0x2aa2fc03cb5f72e237f7d88ef66f765a159be533354ffb88751abb8885203ad4",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x10afedad881a1da7dace5c69546d0890bc35f41992b1062a7c7789b03ac932c0",
    "0x1d18193701979ad24042446e947dfedfad22a6e7d4f6bde875fe2d8c882c858a",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x02f0b8457690e4d9770beb0300a09fc7001cd417061e826bc450dd96d7b24f36",
    "0x0dc31897d61d70e16870e0b02b9776bc53b8b9848be3062f8da18ff9d981effb",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0203c94bb7694f9cdad3a14a7603e3cb69c141200fd46bdc9ebb0d5d73663525",
    "0x2b778a231f21f8a6cdaa3c84372933e610eb985dcc81af9926fe8b09f1afc81f",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2c8a0376c766055e6a9d5272a2466a28faa7e359db111e84d98b2138c8c9d5d2",
    "0x2ffda33f5b85a4fde16ba590ae0cd49fce4ad01e095f94f49138fe44aaa8c778",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0318af53cfd822ec2a7f4d40614f72fc6cb27f44067fb58d15789bbe15444844",
    "0x0d24997465c5b23d4e7436a4ecef2f91ce9f8910b6fa8a4a3ba6f884bd7206cc",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x01ea39e4d9edebf65d648e42880b396a6becfa66b3c5e47ff9a33577a3d2a658",
    "0x15e4e016c94a026fd9ede9bdcf11268f7735cf5ebdbdd4a092fda1ee8b50f2ff",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2ef185c4b1cdb7072a82fd43fe4bb145c4dbd04973fb3ef76e757b00392eac9d",
    "0x15cedc8a4ef6f7017d1dd3d92255beb54f1d7d1e3bb0204cb07ab81c71435902",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0dbf148ee8983db0c117b111270f1c2c8219565733684494eaf5ce0645e5749a",
    "0x2842f44ddc05dbd5b319b1efe6b3eabced380b99ffc42dfb08805ea2b4c48aab",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1aa07e7ffa4a036f1b7efb2e124e75028426fdf5f1e4fb8bb62e1ebf3298af2c",
    "0x1e5a2abded8c7022a8ba97ea683b605d09f017fd43e92296656561eb96d25d32",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0acf3ab02c018573bc3d36b0cb73de6df11e8cc1dea223e98a2a0cfbc028d2af",
    "0x1bab48ad2c31dcec5fcc6df1f02dc4164f949202122673b06105f7ff1beabb29",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x01a36af3ad1c61cddc06a2a4c6967dc004b589a4a8b358ded11a38cce6a7f31c",
    "0x125e0e822514cf49536fa643a66e1d2fa6788cb5b4805c9cd3cb69a584e0d8d2",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x085be8486ecb3dbf71d63940d8d689f9b142434a14d5d4f8c93d7d0f17bfcbd3",
    "0x275651360d88063b2feead8bc71ae9c002d5db9822ab63b058f11e0d506b17e3",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0f7eb245596d9ac5ecc21446ed94c80289db1e1f9f620c18f7815b247b228a6f",
    "0x221862a04a00f406bc67f7677ab459c9d887c8bb88091513f0fc2fb103ad549c",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1bd575603b7085afcf0a588a5fadf8705cda7eb1d4ab7e70137dbd47fc26e3a2",
    "0x146d1d176245ff772db8575d986a82e931079de61e67184c4158a6f62db446f1",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x02202ec1e7fd85c4749393664f024d578d392d59cb12a42e2ef4fa728da4cd3a",
    "0x01c0e72693a0e12bff0ab3e12a1203c846b5dfdb9dd5ba26a7309c6970371421",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2b3d8733bb4872b6cbb0bd83378163ab14a585dbf5ad9758c07948de056071e0",
    "0x185d12aa30aed1a0575b9d3dcee6332f4fa34643a429cfdd8de0fdc87a29640e",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x1b394227301f28bee29bd3dfc35dfcc8e1c60ec6dd944dd33593a9a77675f641",
    "0x15b1cfd522bdc418f6c08a3deb114a4ff48854b4a496537d41eb3a325f2265e7",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x0bca3aef46833e8a30a9db0a16b59abc619800d2da15da01dd5a0713ff4cbbb8",
    "0x0529062596e51b8ca2c2f8c7cf4adff0853150015e2e6b4ce7af212500f5e6ca",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x02fda517f4261325a7366a45da1e847cd150d022be2982eb6105dcfc31fdef60",
    "0x1fec5a09cea4d25e5b7ff9d2fbab64d264db993e8d8629b7154a1539d12dd1cf",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x2d87776eef5dfabbe5605094751af17b831717fa3f8e01943b74d1a9a42eb1bb",
    "0x0d257a437910f3995aebd0afb9be584967afa4188c4684958f68c39f9f01ff19",
    "0x066f6f85d6f68a85ec10345351a23a3aaf07f38af8c952a7bceca70bd2af7ad5",
    "0x098f0aa06092ed2cbcbac004f90799e6e1c32fc24a9f0b6066f8d7289716aee4",
    "0x0cc57cdbb08507d62bf67a4493cc262fb6c09d557013fff1f573f431221f8ff9",
];

pub(crate) const C4: [&str; 88] = [
    "0x19b849f69450b06848da1d39bd5e4a4302bb86744edc26238b0878e269ed23e5",
    "0x265ddfe127dd51bd7239347b758f0a1320eb2cc7450acc1dad47f80c8dcf34d6",
    "0x199750ec472f1809e0f66a545e1e51624108ac845015c2aa3dfc36bab497d8aa",
    "0x157ff3fe65ac7208110f06a5f74302b14d743ea25067f0ffd032f787c7f1cdf8",
    "0x1b0f68f0726a0514a4d05b377b58aabc45945842e70183784a4ab5a32337b8f8",
    "0x1228d2565787140430569d69342d374d85509dea4245db479fdef1a425e27526",
    "0x17a8784ecdcdd6e550875c36a89610f7b8c1d245d52f53ff96eeb91283585e0b",
    "0x09870a8b450722a2b2d5ee7ae865aaf0aa00adcfc31520a32e0ceaa250aaebaf",
    "0x1e1d6aaa902574e3e4055c6b6f03a49b2bbdb7847f940ebc78c0a6d3f9372a64",
    "0x2816c4fa6b085487e1eec1eefd92ee9fef40f30190ac61009103d03266550db2",
    "0x17359fd88be36ba867000e83f76ffb46660634efbad15dcf4d4d502d427ff51c",
    "0x0e3004cb44ba455a3f16fefbd0c026404cbac203c0f236baad879610b8661022",
    "0x0a55f276af1ceb6ebc6c6820f334b26f11ca4af98c833bc1b496193d6b04a7ca",
    "0x01ee4b0458adcd4c4861a27adc1404a5981d320b6b8e20e51d31b9b877e8346d",
    "0x14315e2753e7fb94f70199f8645d78f87c194a4054e69872b3841da1b4f482f1",
    "0x2b7b63ecffd55d95c660f435ad9e2e25f266cb57e17ebd1b6b0d75e88a6a56d6",
    "0x00bb56fa3e9fd48ab46d4e7295bbe1204b652ebe958221860f56e38db80d83c0",
    "0x050653bf5dd59edd6d15fa6071f5005057218b33a8f92a58b9c2656081249f82",
    "0x2c575423e24b522655c5a976c65d069287900c8d5825514098c5b13c86f1fcdc",
    "0x2ff3a2ccdee91e09a32f74232b704cdd99f72c1f78557a2ce568b07e218071d7",
    "0x1144734901a81c1543b8bc6fc9d365f50469eb89949491d3693dbe9c6238d90c",
    "0x1eff9a954e24bcd4af20b6ab74d89e1cd38bc694a9e75ea6da217a98db80cd22",
    "0x14707de7496c5638f97fe9bd7d485c20ead6bfdbfc0599791e49fad0301cd6df",
    "0x13d0de341ba819f90fe3ef1f7ce0a54d8538acdd9b3ef840a91d48ee536042b8",
    "0x26520ab1d20055daded712d59b07088458c18afbd0da58aee9f151a903372ba1",
    "0x068cb4827ac485fc6e7537a3c0a06d08a4c2790f5c65d9866d75296999f7495f",
    "0x07d6baaa2e587c21b03dfa0eb71136e2982cb389b438c8bc282748d0e674e89e",
    "0x15b92d36db02cb16b831eeab2e6ed75d126ffbc274cc3362370851526de13d27",
    "0x277b9ce89133de7b7918ad5fcfab7323ef5b9c1916b588cd7e5a0d814cbc3395",
    "0x2ae847b66b3c5d73b70b733040aa86c51f737092d65c3492d529000fa1802b24",
    "0x2fa3e8ae1fef974cded6aba6dc25cf567e16e0af29e675706643f21bf8efd651",
    "0x0b1d4b9508cec4d19aa53f4efe46c57952dbd368fcbcd454a8b1087bc18a2088",
    "0x02d381014d01578b888b3273270babdc393ac392e7958be0478947fafa569bb0",
    "0x2e79a827c85406242523a94431007021bc865a45cabcba4368c41d4486fefec8",
    "0x0207c99b7d594a5c61d7e60cc2365c4c0c804cd434098af6244f0a00c259b347",
    "0x119c124086ea58ebb83f14f262c693424360e97e6fb42ae8596badbe9edb2dca",
    "0x104ff38cca0f00173ccd0b68bddba09fc543f074f753bd8e413f8334f887a251",
    "0x2f5b5377bd156f89845811eb262436638dc038b8cb10e147a87df4c0e2384253",
    "0x0f70e8e02d1d23968930a8e0db69b1c20204f3e3b4cecd101f81476d0b5ea996",
    "0x1ac4653a51071ae722f90a03f006d8575814db782b7f19f607dae4d56ad586b3",
    "0x12b12600e3bfd8e7bdfae5ef9c4f3805fa41e74acabf7de817823017a8b23db9",
    "0x11b9d19908919dacb7e0f8d0ba77286d417529a18a1d89c405ed1c30289fdd28",
    "0x2c350d245f4f75864744f88dbff8fe335b00f4fb688895c1363a7484ace820d3",
    "0x16a7f76fd2b2147db6ef94c22c78bff782de17ef73e52da7df82603f422b461f",
    "0x1d18d8024be1e96ec25626af06a139f6093545aa504033dac7e285d1cc3db3de",
    "0x0c8cab1ad5998072945b9b88228f53c295466819fb94d8f6a9ed449be8f7c18c",
    "0x1a68d133d703cd406ca30041913ce3423c73b13384187ab1530109b756ad4f7a",
    "0x24a58b9e86ce823ff4c45342941417ff23d03c80fcdef9498ca0d860855e01a9",
    "0x0e6315c93fbb89d38021148b6c35320fb793c41c6a4386d6aed6acfe2f952c57",
    "0x2c3806d99a69ce63299e876f5f218c7295d87224795d7568d558696e34c692f8",
    "0x059c893a771e94774d49a356494568dd376856ab89705dff25db8273860fa04e",
    "0x1166d9819c4faae8982243d0deb1f8977027d5cc56bf52ce260bec5e27e8b0f5",
    "0x12806fab3fcb09fc2b79406c3c203c4965fc7259112af2104312e1537327e0a3",
    "0x172015e0e33736058f60aa33e82d3dd73dc3ead89f98ded0dba35dcc1d8bda2c",
    "0x077ba18800d852d0a34f70ae8cfd68a080296bf9d47a1b40de7e6fd6392a0d30",
    "0x2094ecd768bfa8f0df0d78d0d946e1aff4a2d38e029e41479d6e3c0fe79fa8b9",
    "0x0ccebd302afe84c20ff774d3c1f650ca7cd0bca08baa1e261da9c7441a823f89",
    "0x005b9303053bb40c73671f5d55b4052e0d5549871f1b5283f01485a6b568cd05",
    "0x2527289084ab492275b4cd67d38311a2b816eaa68ee6bdb2389eeefd6ba4c721",
    "0x2222f9738290d8d5f2a3eacdad95f12cd4e7417ed2661b012f6448c7503877f2",
    "0x226c8208f26d69e6b7e02fe26557e6bd160fcbe27ee741fd1e581161c1789354",
    "0x216b208c0261f3c91faf609e15f7a9d4853e40d9204496b2441115d73c2941c5",
    "0x0e0d660e046a259f3bad6829729b6ae3151fbcd75de33b122fe134ca3d5a4dd6",
    "0x240f039d2026b3266f39ba5c4ec48ac6ace88aadaef991498cd52daaa0ffbba8",
    "0x28c8cccf7b40a2c3cfd2eee0ec4d160a876a4dfeb408ffe333e92fa5e1ee4d79",
    "0x0d7f81b4b46d4f247c4243f045a852cc957d2b2923d28eb2fa77b5a9844efd69",
    "0x2be432f87b2c5094a82c788457651dd8cdb0200ac3b42860cbf54475996b772f",
    "0x13ea39f2d63d9adae187af14dd07b533d45a63435e0ea4e5e555d35e70d4016b",
    "0x29e3b1afe1973be9cd1cf4b047325abfaa65cf2b98ff3aed47870461977ec921",
    "0x08db7d684e6b841b5e9692498f95a1f950a1cf1eb638bb4e48f3bc1a3c571197",
    "0x0f4f1041a976aa05196da1c042124e3277ea1a28fb6eeeab4bec1243bd31618b",
    "0x05a9d0526d6f18c86b255f00e86ec34e7f8a26c251b51c21fe4c12bdc4c0ff1d",
    "0x284b0304dd6ce669bcf650c5ab85c89d4410d472aa6eb00df1b8d17e52f2f3ff",
    "0x2363e9b01a0163598962ff86907002f95902e725049294ca7ab10cc7aa3f06ba",
    "0x02c2db12647c4c0461dd3290a75c5f2fd8d7f115b3e040cb05dd7e3ad260d842",
    "0x2e3c42f671431f9560f3d0863ac445052422d5b993e9fda6b81486b14ffe3a74",
    "0x1d38441f228c0ce22ff2882560f5d7ee3b4c0caa101371cb7782ffd97af5fff1",
    "0x268141b0e49c59eab1d573ead4e2e1f379364dd133f2cec574c25ade2c794287",
    "0x2209cb2e187df1522810d3f28868da6cf52af9a65dbd7b806049f472d966374a",
    "0x0a5eb2510e6f804d1830d7974ac1677d082034e5388bfaee91a319eca7c1ffab",
    "0x1cb2864c38800736f8f3ad98669d3ad7a9d5ee52138e96b8a7015e1089e36ae0",
    "0x2af8ed05bfc8f8ada547ee9bc6c7c6c5e8c15c6c0d380a3f9aa277273321b54e",
    "0x0f85d1593b35be03f79b222885555a252bf1f0a3911d784132c49b1a96ac0f3c",
    "0x29095192ec53e0b859eba456295d95bc4567d351a6dad391b8b89707855008c5",
    "0x1a92efde1f5fa56aeb02b4c4b8f51ac80831f898c7843407113fbb6011177854",
    "0x2a05e8deeea15e4377c080aa70fd6a86dc73f3fdfa6b55f5610614c184b0b02e",
    "0x12119f3b019cc3fc46ecc80893e86f510b1dd4030b2ce28c9dadcd1e71ad4891",
    "0x042b6ffe687bc23a2bf6b73317286a543c60ed122fc225aae742c3a1c2dd3a1d",
];

pub(crate) const M4: [[&str; 4]; 4] = [
    [
        "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
        "0x2a75a171563b807db525be259699ab28fe9bc7fb1f70943ff049bc970e841a0c",
        "0x2070679e798782ef592a52ca9cef820d497ad2eecbaa7e42f366b3e521c4ed42",
        "0x2f545e578202c9732488540e41f783b68ff0613fd79375f8ba8b3d30958e7677",
    ],
    [
        "0x277686494f7644bbc4a9b194e10724eb967f1dc58718e59e3cedc821b2a7ae19",
        "0x083abff5e10051f078e2827d092e1ae808b4dd3e15ccc3706f38ce4157b6770e",
        "0x2e18c8570d20bf5df800739a53da75d906ece318cd224ab6b3a2be979e2d7eab",
        "0x23810bf82877fc19bff7eefeae3faf4bb8104c32ba4cd701596a15623d01476e",
    ],
    [
        "0x023db68784e3f0cc0b85618826a9b3505129c16479973b0a84a4529e66b09c62",
        "0x1a5ad71bbbecd8a97dc49cfdbae303ad24d5c4741eab8b7568a9ff8253a1eb6f",
        "0x0fa86f0f27e4d3dd7f3367ce86f684f1f2e4386d3e5b9f38fa283c6aa723b608",
        "0x014fcd5eb0be6d5beeafc4944034cf321c068ef930f10be2207ed58d2a34cdd6",
    ],
    [
        "0x1d359d245f286c12d50d663bae733f978af08cdbd63017c57b3a75646ff382c1",
        "0x0d745fd00dd167fb86772133640f02ce945004a7bc2c59e8790f725c5d84f0af",
        "0x03f3e6fab791f16628168e4b14dbaeb657035ee3da6b2ca83f0c2491e0b403eb",
        "0x00c15fc3a1d5733dd835eae0823e377f8ba4a8b627627cc2bb661c25d20fb52a",
    ],
];

pub(crate) const P4: [[&str; 4]; 4] = [
    [
        "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
        "0x02b257df708d2f3d6785ff39129c7f268c13aef87ee92e9096bd6bd8d2989a74",
        "0x224a7cc70daf93a67ba74c0f2d80c5b0aea7ec1bb1f4e17ea21ff147c58b0a1b",
        "0x18ce43c42faa57788e66b11b59c98363b6970c4fbe9206a0986ac7a4438b96c9",
    ],
    [
        "0x277686494f7644bbc4a9b194e10724eb967f1dc58718e59e3cedc821b2a7ae19",
        "0x27907df41fa277d8c74c3725e5b8be54f4b35d3d0b6e57b26ead3cde3d431897",
        "0x1b7e85dfcfe013c45746d870fb2114991d43131fadbf80494c01d5b105d44a5e",
        "0x2c1597f81dc951f0b27440567676ac64ea1b184e65eb25292cc4da61d8bf9824",
    ],
    [
        "0x023db68784e3f0cc0b85618826a9b3505129c16479973b0a84a4529e66b09c62",
        "0x02460a032cf84ecd1f57096c9d21f5d48d1b21abc6d70277d7a75946997aed17",
        "0x0c7a2ae4396db1838e5cb1ee490a768c1777efac919031924ab242d19be92806",
        "0x08c2147f957a152ffc37eec7b1cb029c07ecfabcc84489502a6e052aa6f94288",
    ],
    [
        "0x1d359d245f286c12d50d663bae733f978af08cdbd63017c57b3a75646ff382c1",
        "0x2456b3c4841aabbcc4bcb4950dae4a0f8e60cf0511decb8b67afdabeca0dc590",
        "0x1a2e45b92aba8f36f92110d68941ce37d39fe27d02b794d53f7b961b7ed377c5",
        "0x182d95b63ec720b3af3a3bc6d0a6012d4885ba5754f32aa1f1d92ba130fe5745",
    ],
];

pub(crate) const S4: [&str; 392] = [
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2ca7b911ea4f6a11da0bd5e72ab3cc621c5908b59ff3d76c609ea9c2fba8fa41",
    "0x2de5f3a5bbe5b20d77ba6a6f8ffe2db01ff5000901b9ce0140df133385fd9506",
    "0x0a150cdbffe3c60c7a52cefa903bbee4d3846d24339f926c3655cdf9f81f67fb",
    "0x2026ad7e03636deef47934dd0d5dd29d87056d172e993bf5e96d6a3bb32d2e9c",
    "0x232507a3d48ca163c5e1b6f5bf391141524733d9cef80d404fdf78393c90151d",
    "0x1b16b96e6aec89d326a5a6c18336ec3c56e7189f8c1fe74c5c46074b865a1d83",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0fdf5d15426498ac82411ff8a7a3884894f02c5242eab1dd7fdfca1cfdabd35b",
    "0x097cfa1218fe00b4edf8ce61cd20b4f8875ea5c8282d90f6f7153c9463bfbd95",
    "0x0fd1ebd67968d1e49926c3952aaf96d3558aa856acbfe48e5a9fdb4285ad9bda",
    "0x27d5dc47f678316695d548d3b4fd1b00244a11d4cb753edd917d849cfa02fb8c",
    "0x2602ddd7ea3a280860321a70aa806562a57bebfa5a0f5d2770f3a169b88ae244",
    "0x2fafd30b7fac7a6699776892b07366b40fa387bc4141e009ee42070337088a89",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x01b2ac2c9f97eb32560cee0b8e8320f52866b17042d2c7c13178dbd963936517",
    "0x0c6db19118e83768bce24e1556ab9d383adb0f4f2b63c3f540d5b5e4deebb1f4",
    "0x0f94cafc14403845ea574997bf75caba6b2016ee5a10de57ae35923c9c6a2261",
    "0x09145c337938ac3f71b78022c80fcdce4c1742f47dd2190c31c3cc5a41980f5d",
    "0x0a0ca462d8ae218e235b6f24f4c17747886524aded7e4f3a59631497a4f98863",
    "0x1851288ccce2bdece3a7f68ff33b00cb961e6292f2af29c775cdf6ce3fe0777b",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x09ad33992db79124edac791c80e82876cf3a60a043edfcd7bfb5a93ee3feab08",
    "0x0b320d1000c50439a989886c4c11e711bd26667e61c50afba9d347cbd4b312f3",
    "0x26123488a4f037ba7b2a51391f25f91642ae52bae1435dfe32c5f47ce63f68a5",
    "0x0d7a4403c3407d64ff5f63275add86c161183b2f1e88dab842607a8f3fcaa270",
    "0x2cad68fb4be69ca135d9b37e2d3084557efa6423a9662f1fb24150b310c71727",
    "0x2e122deb202b0e2c6a25e15226c09b9564cc57a8fc0d3645be77c36f8f27d4fd",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x23e090845b17c18cc12ff83ce7deb2e58cff2f37771c39cd0b68ba14f4cd65ac",
    "0x08b041b40e47ef1883a30a5e631cb1e0596543f5c240701002be9d495d59a775",
    "0x19d0ad6176cd87e6109b92dff1b863104182e2c85bbaac5330b2b7a4b56f9a6e",
    "0x11296e1ff67a98dff758d023ea74c5fabe372a797f86a621bac4bbcdf31878bd",
    "0x1b0943c04cc4c3885335624a4df555ff89e439a40e6691d5db44732aea1b36ab",
    "0x0c2cb45703a55a050e57ca3e51bf386b2cba4d5dadeb1749f8a6e047c5e9ac1d",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x20c061a0f70692748ab2f61b7e52e5ddd5e704e51de165eb19312700eef604a9",
    "0x2aeb2df6a12c099b42c03dac1557681f03947ecd76426d6cb8a749dfb9f964f0",
    "0x111fa84f899677752592a75d53083c3188d97a72d8aa1be3835b681bc6813270",
    "0x1aad37ed6a2102cb892b98a7783fb019752cc8c0327190be544ad76165251f90",
    "0x1be6d262a580b10956cd6163ef221f3d9b0dc3e5cbc7ab04b3f8f2a0ffe86be9",
    "0x19fb44907e93686f59b9f17c0266c8139f8f4d8a5d212503bec1c6ef72409fca",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0ccbd07f12f007d8f30c6150e395dacffde4eae8fa51bf6bea1d6a7c421a586d",
    "0x09a3428b0108143dc9c78633aa3bb37807bcd9603406be211bb286e42b58cb52",
    "0x2a7ab6ca90a4e66f52e863c4b0f515148798ac8f92661b2b816902e915d8227c",
    "0x179239cb6d96131ef12f09a58f9535b66b23c4367bcfab687e9a7c3c880a040f",
    "0x07f9eff8cd62907b5d607140bd0b0944d175f17abe2b2eed814b6463ad29b8ce",
    "0x2f44cd6674099eae8cee5c6f84e9b25cfd7c801e0b457278e83fe4b511458c8e",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x241d4acb53e51cee878b7d23223fd33311ff0aae81f4faa07816546eb732d8d9",
    "0x13016b694f63245a8a9b2f09a84bef7c0711bb8838b3ad49e0b7838f6f644560",
    "0x240a3ff47c2e7332534647a5a2fe278aff069cc479fa000d7c31a78ce2929bd1",
    "0x1a510b683ed295b19be81ace3dfbf7cf1061b07a18579325f7cd001d38146c30",
    "0x20c4eceba419b0575a95e295d84e71bd1a928d5ccca5d79a809059de3342c9cf",
    "0x0baf9899a51723a56cda43c1aecd6c096a499b57ae1893e16a28908bc5dcff6a",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x162315c3b31a4d5b766510f46974ff89071424364fd69c9bfba1b6e0bece8eac",
    "0x2f6a4f9489ad4e1439c806d757799fd6ee58ca5d0560d15a8f658c6eb86f47d6",
    "0x0f67999a01cf660e19180113f770041cc147a335e19f545e3f31a61bb6b4efa9",
    "0x09146d7f035d379789456542d3d727b593a6fc67252a631ec407053635478fa0",
    "0x2e44a6eb2efede0a5768d8491e4c86bfcd63b0ee2f383b74d62af311cf91de5a",
    "0x160631bd9c54749181816c9aca5fe004260ee7a56fd35fb56977ef04911d5e71",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x26f7f151e37cde405da94d5b7e897e9768862af285902b590b636e12bb43c7af",
    "0x0eeffd18325f8754d15db8adf98d290ac816cab0e4315306b2418068e78dd02f",
    "0x284277b5d2b0fd66df351ff703419da6b1aea5ee405bba09bd4a369e6eaea49a",
    "0x13584c5168cf2fc77f884d111e05fa8512e7cffec60dd3a105503196d682ca12",
    "0x1ebd55190bbbaae0e9dd1af991eaf3ae13af0e71fa686312224c886c97e9e2f9",
    "0x13a449ace196028aea035af0cd9d5b763d29f8d292443a762d8be06b1e136dfb",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x21fa424cf90bf0b715656aeb3d02acc326cb56880bcd91602efacf66164bd07b",
    "0x24694b5ba9200603bca8f52d73d0f3fea26c0ee1939d2cec8a9bc5f961cd68c7",
    "0x1a6d98f744fca59c910dfb19ad89d7c25f2c719332edbbafb6cc85c190e4e170",
    "0x0ab904b12244246c2dd95c69a28ab91d2c34e641f697b5361bd91d1625c937dc",
    "0x0fd87c8923668cce921af698cda67103c048864129954800460374ded5b86770",
    "0x2098ce0512ca13bea1141e48f14bc691b410cf81de7f597d062465e1431c4c2a",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x04d94ebda7313ce25cd0dfcd1dde7992439daae630c054d7cfd6d690a85c27e9",
    "0x0af2fa274dd5b1e16568fc4613e76c9ab4fa99d09d10105e98bd9b92b82ea455",
    "0x19153b7441c48cd270b491762e96e470858714e9650aac65169577d2fc755af4",
    "0x2a5c69d030248d78f70674af65d92a908a7c27c34f32f9fd2417450e0585254b",
    "0x0436d86f139382ffb61085560e2592290518eced5230894b4a8bcdebe06a88fb",
    "0x23b40e7f1bd0b7fae8cf2ea0608ace9299b903ac8d9994f7448bc2e46090af99",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x21427832371fd1ce0efebe904a3ffae941142d4f35ce77e064e256ab5937653a",
    "0x1b527a15f36d4f03015a6ff483cfb5c18f8b331a7caf79237998fb914dd46149",
    "0x13d847e25b71d35789c6cde81ad9ad9c1afa6ace79ecf363920dc233e5646338",
    "0x238b13365a6b8fcd6580ff9f4bf267b01366a41d7c326c826be7dfec751bd480",
    "0x2fdc1ab225df187a8fdece2e14114cb71f01ed887085eed22731ded19882966b",
    "0x2fc9fa00830e2671b36e8eeec5c369a6b3fc27bd96905b5fc220fcf0458d1c3e",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x101b70dd04be642aa07377610e3ee7d630bdb12e3b26295806b92e9f482151cb",
    "0x1227872231f192f1c81440c79fdebe597ce8ad03894cb07ac9b3423e4db90d10",
    "0x1d01d734b7090603174951fe6d338fb3cccc00c0accf2ac8d45859f45166305c",
    "0x0e593e9c0177976f4caa991e54fc7eeae897fb723a9fad08a811b296f3e7b10e",
    "0x2fe9b7637f54d7060ff768205f9e161a4cb3bd9dcf14a8bbcb37743b6fc60c16",
    "0x26ac179b67db2c393739a450573022142905e5faa7e8efdd1c717eb603a6d9c2",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2e26f19972ff8bedefb7803e3284690f4fc7828cb0bcf3b5d5697b82714a171a",
    "0x07f4790a30254f654fb0a465c42217421998843693e2c2320e58cdf31a77ceea",
    "0x16adbd595b9959b8b903db7df15187e66b7f6fd433fd2ed3ca0dab8d45f8d031",
    "0x1341399558f697e9e3b49e50ad3889a7a6ac1b7a169ffe1575a3172a4f33c75a",
    "0x02c8e714ec99e38714e1d01b984f863c0d8e05b8c3b7ff6fbca20caacfbf3bf4",
    "0x0aeb4122ca96285c5eb5b52fe2c26355db417406c567aa6c35dec7fc58ba6176",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x24f5e61cac001b78c4664cdc75cd8d75bde602e45c6dac698f3b28ded5a75604",
    "0x158dab8b85f4412fdaefdee4d4f1fecb22f433672964d2ee7730b03663361f1d",
    "0x210a7fd894e483be032c8e6876957968f2152a9f1eded11c3cd26539ab12a213",
    "0x27dd83e178817fe22e022c22e620afb88e02fb15346322b8f70bb26485b813ed",
    "0x28b60c3bcdd4693b01f111dab969ee5dfa4a8840defdbf2bbf38604ce4e23e70",
    "0x05c56f683ea2d1d507676f03c411a29c9925215ca5d8e7f28a3da73cd7b513de",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1ef913d33b18f5ca1d000c2209646780c4580869163f287c4fbe537e270c308b",
    "0x2f77767437b926272dcdeecd45416aaa588551a79bfeb15fc3c76d938d12afcb",
    "0x2da62c50f92d8dcc0f6fdd909051708b0c8f21f966ad57ba303370f00209ed21",
    "0x118c1924b687d5268424af23862f95eb629e1c699a7c27de27c581c495ef159f",
    "0x1c20f20b601f89d66abc8e1854d3f29489de9a559584b9df842fb988980133c4",
    "0x19078ba50370eef76a00f6c89217183bba9da58fe15d8a07c565caa019147772",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x090d697c32be00d8b71f734d1f9023cdd11a587b51581e763bac5b3c766c5043",
    "0x28309a912afc86848b67f7d85be9603f34ddceac4385e702f3662b3c2bdcf9e5",
    "0x0b100f36ac254ea63a6b92996445318f7053603e181261d07051400f302dc3bc",
    "0x1931597f6dfad68193199a2166736c0c7e874189ca4d4d2555ef9d964b06c93e",
    "0x0b26976995fcdb354ec5c6c50e1b29139fc3c0a64709cbfc2fa992effa833800",
    "0x2dd919c2edc302e56e0ece7b8537905feaa8c6dfa6c6130f94d68f7380bca019",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x278b0231cff85bdeee497f6274fda5e07cefaac1ab05ce89f863db3fce5eeb29",
    "0x09ee1dcae79dc90e4cf0d0fb5e6bdee96fa6b751adde822d30e3a80b1a5bb506",
    "0x1769f50fb961ba50df8b9e03a12fc37bc965265fce93f9762b274328fd04afbd",
    "0x20a99da43235a2bb30b0ef58d708d07740510f517b2eedb678a94aaa4edbdeee",
    "0x11b7181ec0f9a1485d84cd91c342f70e1924c7a85f48a33e7bf8b5dba2b8b7a9",
    "0x23453eb1a5e44e28b31107f29dc6a7bf4818a7ce156d2c7e81dff75cc02e937a",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2abc91241e3275e2028d68130f5533d6c8e3d1ec2942632fa4b91a49fc762880",
    "0x21653a887bf627cba0b5a35ebb3329f4602afd8440ada0050c31b249d962f86e",
    "0x2ffee525440cb92eafc518b16135ca00df2ccd813bf1f9bc458252d7ee478def",
    "0x0104bce734fb0322de9a91058ffb340e35c212a8af5c5b6ce1817344d82137d5",
    "0x12db34f34145195e64455a298fe597ce8b757426784cc53975ed5a439b91c12a",
    "0x13a9a61ca0008c1b911748f5593bbeaf633308428e4e85378214be04aef88b1c",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x14ade7cef88a7726d51eb001357d8bfce8d1d8ec79472f6f2531d94792d4707a",
    "0x24baee921a2b827fe96835346b85a3e94ab75b4eb9fcab4235cb9c54d0a077a6",
    "0x04dfb441b179922b9e2ca9458de6d3aa0c653beca2fa7317a5d1fc4138e8782b",
    "0x2efdb84c3c6faceb0f58fefdefc09e447ea2302291d3ab11101d487f3c679ee4",
    "0x24d861650389f03a0da9d720f25df6e7ab3796ab597ed63d38055431655bbba5",
    "0x1f8b2609f6999f6b15577697e90e891fc7b691c30c2695278042c2d152aac2ae",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x242fed5519f01070752e2e3779757e5df21033baaab86a9fbdb1a54d11cd4db6",
    "0x06dff8e392f51302fd8864de5068b943a2b04fb0b239c38b679faf689d69e1a9",
    "0x1ce5db5cd27794bbda0f7215bd9404f46502d2b601f74fcf2cb1a5b7fd440fbc",
    "0x16aea838ec8bc6e8b8f48309cd6e783cb4a337b92728f66f701f0d5efb32a80a",
    "0x1fd21a8ff13f0ef12be5a125bfbd5e952ef1e46b4f3747f3fbd8198209d4ea95",
    "0x0125158b21d677618076854954d977c35a6313a1f37564e36bf6d072d2500df6",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2bb8e29cb323e3e2879d93d36e9312bb3c38a922cc6bcc1689f72793f5d4a18e",
    "0x0d0e2ecbd08e247ae7aff1bce2bc54ad1603fc2cf0ef32822701feeebf4e826a",
    "0x2e7df0f7b842490b3f39d0d87bbb35a90cf23f3cfeef3c8a4fe4716a47699470",
    "0x1d9dd609a2944aa782ecb1a08acb5c0bb857c7489920644f6839c93c10b37837",
    "0x11ad269471d4b36fb23aa243904a0290608c32759020f082cda8b4d538752109",
    "0x2d2f546cbe60a9822e205c3f3fd187bf89f6def774c3f988de86e4eb91595bea",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x28113fd3a8d3b95ebcf29f2ddb54c6d9ea034a51e3bd1198e4c1f4f1dcf068d0",
    "0x114ed46d49b389b14c202ba1c069ed4d836c131dcec2472f4bb78f803b90025b",
    "0x14a217bf8737fb3570e38b75cbc97b316ba21db8a3f316aca5a26ed35c0d1424",
    "0x16c9e7a58ddf141978209561d930058233b8adbb9e3aec9702ff674c22b009d0",
    "0x1388b78b9ec0242e402906d75be419cf92e3dbc2a5152df9797318e004632793",
    "0x2a459318d3f7156d87e3c666a8f7626cfed0d30fca28ef7927513b1f7a294b07",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1f3df3ca1c4b854792a69d107bb7e6e7be2f479be397de83c94cb310e8e821cb",
    "0x2869447a669cafc20f1f9017028e3098b38a82fdf3cee59d9de2c888004b41e9",
    "0x25eccbdcaf0a67d5ef15c7baaef8bd2a4eaa1a6d5d70385ed777c10db4796ff7",
    "0x24c26970e999f27e6351f1be0a3211c0a177cdb778ead13baea9b7b4be3534a5",
    "0x0731afc922ad48a9f0ce9d635e26ba013a7d4ae8d52d4fb75f0f02409d83433b",
    "0x217044abaa3c9ab6c51927ad1061d0c1cedc63a90b01b7b5f1c10974e66f879d",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x26cfa9ff210943f6b07c08691c2eddb1bb1d2167a417912ece724706b5c20b0e",
    "0x0a5509b4fa5bc8be630a2ca7c40980904713b196e36a7e9f839c4474037e049c",
    "0x1c4dc788b6131f9dd132c2edffc7a46ec50b000383faff5419392f0d291c3475",
    "0x150bdab59767a62d994ce37edf2c3cd5311abd0bfe541fb30968e19ee2601053",
    "0x25393627a593730f4cf25a068932d447c1581f251f9a7b7d86cf9e392aca0d31",
    "0x10598af7a84cfdb4c458ca7625dd8b18509491e7109db65bd8a0f80d8778a6ae",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1fd5ba5922d7109795d5dba77bfb57ba6aef1bb6aef0baec38d0f916d35ec9d0",
    "0x0439026e268ca0fa85b1f6ded27c854552eed2629ddb59e6a679d4efaea6f218",
    "0x1d5d47eb657ce510b9f9a17e9a49d6f0040f7f360399dab7f053faba3f06286e",
    "0x005cf07dcd831c1c51062ea271b402941996f46dd9df0fbb227305a550f42697",
    "0x24ef1615afe18b0ff998bf9e1fc69fedf38db66b2257f4bac76adc04ce92e029",
    "0x0ce1da26cb97828162425a7236c23e8f4b7778bda9d7d514b1b8fc9328087c2c",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1355e415b0db4001ca01503bc20232a49e67f0e816dc90ff18a4280437e9e9b8",
    "0x011fc9669cbe3bf176da65f312e409d635dbee3fbf8f3d1d6b056b48473cb451",
    "0x1d6c1910236789557b4c42df0191d2a46cddd2838ec6a74b7c308f023e71d4c5",
    "0x1626f4d2cc7f2d46d7c9c97030c1b420d6c2d55033f7becea7d377541b19f57f",
    "0x210c4bb43d712b400d4bae4bf8dde436786fc88bfcb82570b3e235ddc2982115",
    "0x213fd23b04ea9e58ea915c1fdb460f3a0ac4b0041afe80f6ca1ba9e1a0e13825",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2ea430efe8ee1f2c72ac009258a1ad98b87725c00f72d27a31c445046bb9a80e",
    "0x2d694e23e1b3f6b632b646584e76fb7b0d35aeda598fa5069d73c75136bd0272",
    "0x2ed754f34a22fe04fbb3635776e0894d21cdbf4cc6e03b8bf33787883c1a0db0",
    "0x0f23e64e2b59d750be3bd037f4df62f7fbf16899400e69554b893f4afeaa41ae",
    "0x1cd301878d6d778480ef82b2a3cb9bcc36362d198e44c204e490cc524a2bb2b0",
    "0x276d797b67c8b3d935a71d2f8342bf7cbbd68de537e32c466f95a01a5a207f04",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x016e8ab5ced34e81dfe00c24c7fbd0f4188351be2b1b26b6d63a1e02b84aea6b",
    "0x1caf3b10ac5814656ec2d5852b5439f810c8dc0a4fd6ebe82d9f33134f60c7a7",
    "0x225f97bdaeb6a565372c547e9d6c354c1f78fa1998cc3d92c28212ec7edb634e",
    "0x2d828acba9e58e0f3adf239a3689449515a1ba244c13b0186c827d600b7a7358",
    "0x1f9da4066a62e0cf290cb839bf62c9a49cf79b0ea1affe03696062ab8cb9d39b",
    "0x240706e2b81b5b65343b41e59330666d2b405258c4b9b177495776c2b1b6816c",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2d0f43029750f58be22d66c5b2963ac6b15b18c6e9d009b717044859fef9618d",
    "0x14237392b60352f6c8aa0f5c08024beb882ab82dbd3e790cda3898886aa3e9bb",
    "0x0c8f3b03657beee6e1f94c98662b6339cfb7db5cb431fb9813587ee3f194d260",
    "0x18700b515de19b3256513482566afcbf490e55633dc0ba574c2fb4efad1ef118",
    "0x1c3b0a6645d002a9d1e18721a96d1e8b00217bdbea74ff1340dca47e6a326e26",
    "0x2979c4d21f80db612fa98aa90bbd65e2cecc1ea431849612005a904c08bfd014",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x24509dfe357470309be062b07c05dd3df57d7cca62caa26001991820ce3af97f",
    "0x2bedda6eaf8901b78a0e53e25dacd92c60673046c86deb333ce4798bcf9357e2",
    "0x1f1d984e06825a3da53ac4066d4910067f6e0ff13ef83152cce3977ccb273404",
    "0x01f592946ac103f244d168802c352a7e2dc52bd2e53d3ef2f4a7571af810609e",
    "0x1a975c6688744220ac1e3d5295126f8ee0db7ca6283a176585e8dd5bce060ff9",
    "0x1a78319fb62d99297737e9dfdccd57fe6ffe0329195b8ff713a2d6d33596a6f6",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x02fb4c2f41520052bd4498be87f445b3c62e86ca7d872dae8fa99c67b5977d11",
    "0x03162b367e9f34180f2228d505e54dbb7f2f23a3a8fee14f3084aea490fbf3fa",
    "0x0da5cb94995f668763e7c6ecf96dc6bc13943abf3e49c55a702d37f36f79114e",
    "0x2575cdf1a61befe9fb7b83e880e8cc23d82600f35598ea2f81ad1bec1bd701b9",
    "0x1f83d6c20646a7e089a8fd0ad274021af2fb24e315f400dcb3d26a99ab5a35ae",
    "0x2c774cf487f79664580219c9d698781249e47b432767b0cbaf5169a5079fdb42",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x203c1b59256ff5c004e70c2c5125ed51cc53e99390a8de9018e647e1be8d9888",
    "0x27abfb2e0894c5b4279b39b9319fa54ccbabd1efc509b31d906a1b5f764963c1",
    "0x2fea2fd0f35fffa4f84894b6525b3fec299c821a4766a78c829c2e7e69efbf0b",
    "0x2451d54dc48cb608f2e96698b96fd545816fef09dcaea75c9928179373a66fba",
    "0x17c5d4cbf713d33eb7c1f915dd2b0e439bebc5510cb409594adb43f94b7a0e9a",
    "0x0279fbf4382e4b2bc46c1a8f719063ddb4226bb09c10cd68008b37c7f32d469c",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0eb7c1194600e6ced3d8dc88c8689704d4188dfe89970dd790bb9cb600652321",
    "0x0a0e776c12cd108cc589b14e8493dc743d85046b1c4ca97715ec501fcb166ba3",
    "0x1a8a8487cb8a60bce5774f64f62d0bcee791dc32d3a6f872f7dc626e4a732948",
    "0x16f103fdba708db2bce8b58c467a05bb8878939c82852921e94e5e955aa09ca0",
    "0x27a57324ff8193272833550d82f749d1389b493f98c8d3473f1a98900376325b",
    "0x26e4040378441fe8a60d1a5319aab70076c82cc203530d82e758844070c04860",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x071846aa99eae694fa17d73eae87534f09c4539fa5c3b79ea6bc56d888dfa9c1",
    "0x0cf75a0326b8ca3e2ad571834bc835c083555587a928fef417730656217faa2e",
    "0x1b80702e894d74821bfef8a2dae36f71d4802940f63a14fe64b3081340c4f11b",
    "0x2cc49fb1ce9198b927ab098ec9f454d205342ab49677037f9ff7f08e3f07ce71",
    "0x1a6e74bef4b0a5b3566facbf770a14bad98d8b6feab3e45995a328135888e924",
    "0x2ef1e0f0bbff91312b2c9b4710ca04f4e978061ba53657e9bc1893bdb2e7c7c9",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0bb77a79511909681081da11a13c7abf3107373ba413ecba4d47ee5a0c288fac",
    "0x23d8b2e6869d7d05101d387c1b8cde6b85b7fe860e7eed2944c50d099053bfa5",
    "0x3023a8bf03a803eda3830c500d1c0e061fa85c4c15b72459475e3de290616ae9",
    "0x2b27c41a943be0d396ed3630098ff7018767161fc1a24d25f47969f1a44e20eb",
    "0x2a73bceed9ee2a7261290c8590e2ff679582a3a6c5988254ddf6f108f1103e13",
    "0x2579c47b76db59c6206ef023b59884fae08ef6a697acf7e55b6f132fd7733bc2",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2a5993c9c2a80be0f4b0a6f9c432e2c0604cf59d5bf5bf24609572d7d0acb900",
    "0x10faea103aa36e7d5c7bf760b355e0fd381a393feca3c04450d7faf0f6a22804",
    "0x2e98e92bc9904ca92c3e6d68fdd79e8bef6123ad5174f01d5dc04a240d8f47f1",
    "0x0119937bb5d5d9029f290239eb94fe86069f2db6bcedcda8a1028e0b7a434428",
    "0x007c67a48f20850fc8ec8c735b73e07af2a08f52e7bc90084e9609e97f070cf2",
    "0x2da7855de0bdab6e993fdc9ece5fadf00c5d39d58f6599a56438aa2663cc35ee",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1a69a3840762376c3a2aec1bd8a434f2a5e410a7e92d23dbbb20a0991aadc46b",
    "0x057e27ad9218a311c3627a25345c879508fb856d68b9c0aca90276b1dfa4bf15",
    "0x14307851c6b079c4f3b26689dc5f62b8ac2b69ccf33f3802e9ada26718881832",
    "0x26c71cfb532662f6e681dd310fe112703b78f8ce1e3c39183d5d4889ce304271",
    "0x294cb0c139a1a5a345bc094d8a53f21d90e82cf47bb87e3d5e5bbd761e6d82aa",
    "0x084133bb35d1cee7f10a2f61953a4c77e09c4661a5565646654ddb7fec0be900",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1807d1d910cf5420087bc575b795cf7b77b590b7d14d3e3d2298b302c875bc1a",
    "0x1df001fd3c1262358bfa1198116229dc12e112bcd91b4f3962c8136c02c57e9a",
    "0x2b424b88ddb0ae2ff74d14a89099f8942df4e737c63f61f695ecea4842f9ff07",
    "0x189b086bfbbb9da30885f11ff9cb213c0a353710153cadd96203c7f97203791a",
    "0x1bd472ab81eb7d6c92809c07a387b1dad43a3083fe658bc88d1c3ac1672e2ec9",
    "0x2bcb32de32d02f4b8f8b1d100459f537cb0e4e1f14cfe5724424107a9929bf8f",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0cfc7baed4497a2252d54cdeaf8ce6f23773209abb5f341ca2ab616f0516195e",
    "0x1cbfb6629ded2640c886dd504a2ec58f96b441839b79e54feab04260eb90b128",
    "0x00b3e19811df2edf55549ac304fb205cdae326abff1e7febd20f350af8752f2b",
    "0x17e85c4c6fe808534124bb66995e5c663eb5a195ac1a26d8a096db675ca0dfcf",
    "0x031cdebefacdf2b2dc708ff87cee0315f36e97308369e304e8d2654c342622dd",
    "0x17c33efac12fd569e1ff7c0a0165c4cb8d23c279d442e7bbd073cadbe4f665b2",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0866a0d2140ed3854d5822fba68985764126345cdafbf547ebd33c39aecb895c",
    "0x02bbd1e9f3114413c347ee4037d08f914d4cb655617c0cfaab77bb09ced39950",
    "0x1ad0d5f7480a78dd4e048c459479d5622ed65f87880f675cbd2c4d97e7bc7847",
    "0x1b88066e99b993f70306cde87ea47cab3efa6d698c9d3b1ba355b2c9f3453b74",
    "0x25fa0cd0dea157ff4ed741b0dc76e0095a51fc30c799500e80d0b821aad7b9f1",
    "0x208e0d0378f2c7d87a6ce8abcbd4bdd979a4d9dc80268cb96d84ad440fd0f99a",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0bcb27a9e590ba76102f8bfa6f1c64726558f57a0027e6ddbc46d564eb8b09da",
    "0x0ce91923c51960849a75b3f8fd1bfe1d9754dc7cd48144f964a0c91a4e08dd61",
    "0x1fac92c295c763fe6b1e3c0f3604f0c7d618def2133ee2f869d2a1e774b4245d",
    "0x087968a25cdbb96cd471e88fc2cccbf3e5b8bd1037b4ee5332adac070a82a109",
    "0x0cc8d9f53ff98eedd6fdd5c5def364a45d12ace1ff5e3626f760773b5de0e624",
    "0x2b95310fe6307070e985d61390a351ca5e1c4a9f5e2c539602136fcd080f4e6a",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x28c0a6ccd9587d41eb73206239493c9150e52258eefa598382cf609d4559b2e8",
    "0x165c6c313faa07be77275b235bcccbf30af0740ca973d6acce2cafa9462491d9",
    "0x0cdeb047d8e50b00253e926dff5f95b4279be0377669908d6759612cb73259e6",
    "0x10140d5f85f2f329572c2c9b7535776b7695d62d6362ef27285485abbf9db018",
    "0x09501340c196da04db07c8b1c3bc1461c228e926c9ee26f5e26364dd894b1468",
    "0x0f607855b7f42530fc19f6431d53035a74eb03f7251d71567982458698c93ac0",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x255be79d8de4168c44cf8a26522391ec6b67e30f2474bf2cc7c792dd25a47046",
    "0x1ecb792391cc746710b586800234267adcd4d9841c4e8f1e76dfc5dd15eaec90",
    "0x292470307f3a20d0205a19091cb044a8f9e58d0156f0364b21f3b6025b65d016",
    "0x0c3d7b0383d1377489843e884a06ba72245f0498e71043af2acda8353a47ecee",
    "0x0c610cb1971aaa4ae5f87fb14ed536198648cdc876c7c6e2f531d7d5d1ad625c",
    "0x1c237dcaf124be157c5897960fe7f22af44d441d2d4590028a07bb249711d7e2",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2a5e583e4003e7e747a1d39ad6027a9f347c7de946a3cfd00750a9a102c05e3b",
    "0x16ccec4b4960d2331a960804ecdb0442ecb1bcddb9bab42b306c4736510675e9",
    "0x2d0db3092b03a54bdb861c291c1a1f522112f9e457e3a51d731851dd59b1365f",
    "0x16f1469935ef074ab1ae192294dd62af3e14ae22f1e294032222c5ae19e2adbd",
    "0x067c4106d011aaf52f2539ba2f8d1fe65ce9ae081858ad629b9ebe8148cc0878",
    "0x12c6eaadcc69ac3b7344b8296ea4a251facc1c96356c84e8131b662f3d5f34a3",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2ad9831069e1f113495cdaaaf18733aa4a4eae1e850d58c06665a1c787ed6049",
    "0x1a6d2b5f928d9f0a9c4022b9520d707e5eca0ac9cee84927a71737a036628f6c",
    "0x1d92d368ae1f42256bfe712909a03c69a46bcd207c17461986a6de00e0952945",
    "0x10ad1d35f6f8f499e64daef032a28251b50c622a28429d2b2107ab377784faaf",
    "0x150225afc95fcb450fa9b2b7723479ecf7c3143eda0eaa257df4f1a798cf6375",
    "0x13c542f46f245c790955fd30c8cfe7125534ebcf6df7b1d9bedbe7205eddb980",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2fea3116266bd3005b05649b48c70089e572a077ed0f8f9730b63cbb9134a368",
    "0x1bc4f0df44852b392b2a36846030f42fcd462c40b04d0c90e71129e621842af6",
    "0x083b244ee2ab819a95d0c4bcdb9d915dabb6832b4dff9bde7ce0515827d19cfb",
    "0x1fe91590b6942e9c496a9c696c067b3086fd707b01290a7711d4f398908c8917",
    "0x2e97a6382c9007fb2b6ac74186070eda269b10506e8e4a74ba82274d154268c0",
    "0x19d731e981d3dd374362f4b4f05c5ee9600b5396567615c3ee94e0a80c8cc4ac",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1299ec83503dcd0c6aaece92e6c2cf7871b61e43318dc82a183a5039044fd000",
    "0x27059db058fd253b71b341d077246299734497dc31f2159918c64a78188b85e1",
    "0x0f8c2dee7cdc8dc90eb57f025076157a181973f6347318feeb0c99afeae085d0",
    "0x1053d862218c7ad87cda3105ac23bcb12c92e883006c3d44fa3f9166e827cfd6",
    "0x1442ee0343b9bc2ae95f8c4f59cb32bb461a4c7b40a12e89b68b6990a4b71933",
    "0x2ef147fa908e6186fc2ed54fadf20555ef2a1e9b3babcb6863879adf84a3472b",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x297d7f9fc303a0f583f992f7347f68b50b5bbd791acb93e2d8bc8efdc4c1ab53",
    "0x2b4e8b40ce6c64abc1c906a956e5aaf5ebbdb7c98110e171adac573b81b16195",
    "0x0316fe041d68e38cbaa5d728d225ed818f00b2aa9ffb1ad3d9ec24bcdfccdcbc",
    "0x168c57b725731fe3159d73e0d94c0ebf35171e3cf88e1267c2b556a5456ae6c1",
    "0x090666d655622b3757b5ae5283432b4aeaece83148a36eb57821d241b3efbd3e",
    "0x02c91164e87fcb1bd07143870286eca8a29df3678768bae50817569f48bd7bdf",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x110f901d246c2e951c579bbe91467a2950e69ecf241d8b68c4a4c98f05284b26",
    "0x0484e7feefee9a459b2861009d6007e8b15721afb4a35f3e5c9a6f1f70334091",
    "0x11300deae6b73e9e5129595f0996c10ce002506c2c207bf672676a130aba8364",
    "0x0ec4bcec59f43f5b5653a3cb0440d71118ce31bb60c75b9c6766b6a5e0524968",
    "0x0efa65a66b38b03467fe38d8669207d9fbb9f38faaf70d13a67c6bf71e1e71e6",
    "0x27806883684a018d11ee2ecabb971dd9f690cc5a22ffe36ce61f17c6ea5fb4a8",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x0f4b7f229e28a7a9e7bf019b18ce7a36280fff22f7a99e60bd84d1baa891cd12",
    "0x20b53ef54ebd25d7c222d418e017b7cc5e00a9ae5221191a1ff561b1ee3177b8",
    "0x14efc55a08da5f53635520e21890e2e5eaf0cc1fa1fddcacf1302dc65ee059c2",
    "0x1b701800b22e5765059fc4525bb4aacfac8dedf2ed37253160baa818678ef374",
    "0x118648d759ffd92fb5bcb86acfdfc4bceddadd6fb1679c317cbbcf686651c67f",
    "0x02601544a6e67f78415a0c2a6e8f4665f5910909c58bb2eb03f7854519af15f0",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x1bfdb6da2db944b4b79fc0ef825d6ca2acd350cbb87ff12187db30a1798d0dcf",
    "0x0969ce62c18f96eb6c6e3d0c5a7bc7b2b1de0cb7ae0474b47d16445f2d067cbb",
    "0x13d54abe37dccf2eede120eeaabc5105b997f3647874179cfebc1c9b022b8215",
    "0x27b42d0a347af048017cd6e2a577e959c0b6b6b8c2ae405cd9b05b793a2643b3",
    "0x2737758ec335fcb4498d54d210c11bce1d2cf1b97b7ebb835c4bd17b1cf8d54f",
    "0x1f9696df0bb5e293dc20d0579dba1866adef8f6e6d3846f42380861f5b54ca46",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x2fa9dd289eab48f0424a48c9a2b4f51d2de3ae6cf2d5e23a10b0366938541d65",
    "0x0fc755141d556a5eebf1efccbcbbf72ead5eecb5ad93e9814b715c4d388d7709",
    "0x26127072286989c57c665090b20dc85c5fa983ae80c412fb2d8ad02194843981",
    "0x229663addd9b99e225513a7d0ed1b43c0b02de97a57466355e670add9ad636b3",
    "0x3011613dbd895a56a9dc81ca4f61a03f4e77c18834c6c20a51be01d4ef9062d2",
    "0x05598cd7707b28488e2a0d669ac14e8464804e51537d7d3baa45a7c80e489c5b",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x16dc1f58a2e54f8f78d4a2bc67c5dd242744ff2db0ea9533a9fb3de2afa831e5",
    "0x2a274cc1ef7dd9e160541523dd6b2c159fcb0f40191b63a8d0a877777b8dd060",
    "0x1e8f3078f2fd0b0409460ab369a100d5a82cd93b3dd947644aa6bb8fc2f4f863",
    "0x2ee81ae8b9bc0eb7d4417e09a83dd467ca8dcb6e8f0c8758b9cba555123dac67",
    "0x0367cb4b603a227e6b02ba57173fe7391e93db6078be2d56ef2e9164b6fd2721",
    "0x184637a267f328df1bd119191fe0d1158eab799713ea537f01bebfa4fbb640f3",
    "0x236d13393ef85cc48a351dd786dd7a1de5e39942296127fd87947223ae5108ad",
    "0x27649a3a1db5ba83511b2f9fb3785dbdf083f1f5d4bed38b76fd379545d9ca08",
    "0x08f84f219781937a7bd7ed5aecdffbcad92a1d31262fe51761c94a0f19973283",
    "0x14f65d95f7359b8f9f3527527ba9722197df3e698f773cf3027c00bc4160f989",
    "0x2a75a171563b807db525be259699ab28fe9bc7fb1f70943ff049bc970e841a0c",
    "0x2070679e798782ef592a52ca9cef820d497ad2eecbaa7e42f366b3e521c4ed42",
    "0x2f545e578202c9732488540e41f783b68ff0613fd79375f8ba8b3d30958e7677",
];

pub(crate) const C5: [&str; 100] = [
    "0x0eb544fee2815dda7f53e29ccac98ed7d889bb4ebd47c3864f3c2bd81a6da891",
    "0x0554d736315b8662f02fdba7dd737fbca197aeb12ea64713ba733f28475128cb",
    "0x2f83b9df259b2b68bcd748056307c37754907df0c0fb0035f5087c58d5e8c2d4",
    "0x2ca70e2e8d7f39a12447ac83052451b461f15f8b41a75ef31915208f5aba9683",
    "0x1cb5f9319be6a45e91b04d7222271c94994196f12ed22c5d4ec719cb83ecfea9",
    "0x0a9c0b1916a8e41d360d02e6e2e5d1b98c34dfcec769429c851867e46e126fa3",
    "0x1dd6ba3731e49d21e8d36e9d4d1edad245ebf9bdd9ebb60a252e4804a6390f6a",
    "0x24ae2a67c3d521c11a11b7112abbdee30647107b808866a980837d0d7da4e3e0",
    "0x0d20c9310b5c14d9ef12866af5a45eae3ca9be16d200497066c8b2ee96781d70",
    "0x0e047c9821fe94d55d400d763a66c4c6169993abed543c7284b4a35430019445",
    "0x29474ab799b1e13948eff41d2ce79bfad335d09110157076988ac207e10c81dd",
    "0x03899f139d0dc4b281be3b74ab4c70789b7f41e7aca47ea2722a20d79afbca93",
    "0x1866624f761ab8dd7a91c5f37af5e47639951d5acb6b1bbf3b96ca273f71029d",
    "0x13c119f36718f7d5f09ad8541325a13acf6b34db6d9ee2af7ea06061240f3009",
    "0x0e4a1008158077402b11f13c08890b739643cc8e93fa44487b5a1575dd867fd7",
    "0x0ef505fd44ac10a251b670dafe14cabd9ada9e3002210ac9c3876f37de4e7ad8",
    "0x1d31e4e2a5978b7491c43d367470a5a5d1445b6b8129a5b9a6fd238405720de5",
    "0x0a979ad5428d481cb624d9d504524a9694ca5cb4421b5d1dc6af2c030fbeac39",
    "0x0f7fccd2ec8bc6ed9ce3682f38aa291deea9373f4995778bf762ade36d6ab2a0",
    "0x2691b924dfa123005f7c078d9bf8706defe99c2ba99bd6ee53b153e9fec7bb80",
    "0x02077df6510b4860e56b913bef3a80dbc464b0e4678add60dea7a9517463220b",
    "0x29ee09d8af9d24ca49350ce2e0aa47d00a3dc21bafbfac1c9ba61c58e2993e8c",
    "0x08b292c661d427506b9a01916624f3cde332aaced9f1a494a733cea6f25bfaad",
    "0x2583699ce536a757b22e4713edfbb050092c84abc72c90ad87393a1da9a4cf90",
    "0x1e3f1b660223d65ad88999475374f6e25fd4148eb8110a0b12cffa19657b0b66",
    "0x20f3ecbb37c34aec79131455461259e59b222f0ee8e02f3194cf62a9ad4c3448",
    "0x0df4f5088e4444fbf87d553ba62dbda95696d8b9cf6210b1c85513b1776fbc64",
    "0x02b348effd4c9cef00a1cf4dd67dd664b2ffe361a807c589a252c63bcbfc6833",
    "0x1ba1e522fcb153676cd8f20e82256f0327c000fa96b1b462fc84b556f26a86c7",
    "0x0294c44df8e68c96144e964c37bbc5766764ed3550aff80dbe9d3fa74419fe50",
    "0x0313716eec6dcd8a602ca040700498dc04c77dfe2194753c59bc818c1d2636a1",
    "0x287dec74696d663e2359f68225de955384d960bbafb90967429a442e19e3ec61",
    "0x25e42f72c6be0942311ba097cf365683db4962c8204fec9213f0f8f72c1946be",
    "0x12b6881b96654fe1768c242acd5399b08639f081a94896f5ea6da70b6b475c91",
    "0x0dfc2b54546fd3267d7be55c716cb243ef18118ed9498c8270449bd9418afdb5",
    "0x27dd55fe0d5c0ff56ad4890fa029c27c5f36d04cdc73899ab99b2872b28eedf0",
    "0x0c60962711aef16e7a2ce59f587443ec8b41ef8dcfccb38188adcbddd32f173f",
    "0x2edc09feb267c6b586e62fffe32bf5f16c28b585986b81116684b7e8b40d42d2",
    "0x0af8386859db252ff295a19466d8d100622c90502137aa1cd4c4bcc9656d11e2",
    "0x121f218392f73d4c16abe382102a459e6c080b3ca4eda51a23e651a13a680550",
    "0x1ea38273f5d59e65061f8c775c571ffc75ef67d29405b5e02913cb3019d56f8e",
    "0x09bd2349005699bcc0ac35b627e2f8f08bfc3b0bf30b146f37742ac1556187fe",
    "0x091c505b1e92448c11aea22aaac4d44f6a7f2132f89e91b7f55f9404696c1433",
    "0x0b316f1c29689d4f490f7fcdd5e9f2d256d443ba14cda4bb799b0573a931a99f",
    "0x2049251919a8f3f4398188b81f99d2e2d0e3f5359cfa55bdf3aa75fdadf367e7",
    "0x1fe7f9eb6788101908814168e3e4cf7a899a105bf9e584af0064188a4aac55bd",
    "0x158e6579b0388153b0acd630ea94de8f6d966d529c2d01b9e9b1c67c1ec1d570",
    "0x1994f82f27153afb9de2aa3f4be05c4b2c487e393dcedca2566aa6b7fbc3696b",
    "0x1b6250553e8629a5a8a40b568432ce7dbd83c87603eeccc8dad572ccebef6e1d",
    "0x020296940a7d1eded2ae79fd78fa2ac11abb2210bf24542feabee71f0d0d7c9e",
    "0x2553943f9e0ffce9c297cd31c29f1fa5f01883cc9e504fded7a905032c170c89",
    "0x1c56eb362896c2f00ad18faeaf04d577f5feb4db4e077965c38f2eaf5f7be08c",
    "0x0ed8857205e0680055de7e822b6f7d62ac0f75fef67da1ff7b7735208885cf90",
    "0x0118f91185a09355f9d8c3f556367a2bebe79e7d9528a8d72a592681671aac75",
    "0x2a71e6a67abdb25a78010fe6fe0a20d1d84e21cba75ad55937dc1834c13af0c5",
    "0x02327dbc05997ce8575680e4b8929d4e9ed25fb9204277d603061986dbee57e0",
    "0x0e05235e01f21cc3f2971c382d18c14e41785a5ec8d447cd93d13281792e6d6e",
    "0x098afa2ea7ff065b2adfc4ab00f3b04496c1e490eab264d2370b107e5a49204e",
    "0x27bddb7bf06eaa63419adae44209dd25a4e35edcb863b009bd34ccc4905d204b",
    "0x2704406bc806f4ccb19085cb9d3771b12ab5ce7aabf0601e9e06a2bc98837ade",
    "0x21c75c54664b9fec86756aa9027261975244f42cf91c9cc0b33c2a62b756a3ef",
    "0x2be84c1d84c16038ea5f933290699daaaa8164c5ea39a02bcbddc66cf69fe8ec",
    "0x2c970e41d48649cf013c676c8c688ac165563720d1d5f32628ac5b239488a96e",
    "0x0e1ad2660a2e958daa1f2654b3a37fee60546ca0327150733070742edc806435",
    "0x2060ee7fdf775fc7e389a55376374c9e35d5c8763d597f426304e236f577b829",
    "0x1e0116818c843ed86f09daee0a581af10d52deeadad77656e736eac08e6f0f17",
    "0x0a89c1498ef25a383d886bb58424e6940ac399e3e557e9de951a697c54a7576c",
    "0x0303743d6f36d925e1097483350f5bd2cb297d4ec9239209f63c516b849a67e6",
    "0x08cf44446d968430232df175d462b9c9b0e2e2c37e8406764cb96c7c3446018d",
    "0x2419811cbaeb3f551b0a9232eee5d53e3769fbcf5239533074375f1b00777f16",
    "0x004237c622626db376b774849dbbe876809082f1b13f5824f4c58369f27fe7b6",
    "0x1e5b490c72eeb607e114a5cb87a8494b178937cdee34b9e8e947342c14454558",
    "0x04265333e59e1a5ff749203cb4a5d1415a72862c61380b1c242d0f32ca15b97a",
    "0x189deaf74258451ac4da682532be43d24a5c683293c1ff7486de26d35d982e86",
    "0x04ec516b0fd42fa53a34905cfdedaad021b36399d03d8263ae08c46af3eca76f",
    "0x2ce1c8a00845a82b3aa1b6642fc988578576cef86196525e6d595c7701ad700d",
    "0x247816fd0d34f9d3b396917478605c94a1c052a6ed663bdc344e7aee9686b6b4",
    "0x00c676dbe6c494d5609c444de622bcf60cf555091a507fce86477019daea987d",
    "0x1cb395ade530fc2407aa7b2148d2dfaee30f4ddf258fc149cce3c5cde80a85d5",
    "0x190e1494e3cfdada3b9e65d8fe3c1ec769540da023f9ec2e56259f6a56890b0e",
    "0x18f2941b2335138336c351a792343222a845ee0a2ea5a3b9160c1d6d9b229fe2",
    "0x14ea23ce8b2312e07df57e0aece1da5d2c0e01f757e6a5c86ab5e403688544dc",
    "0x2818ad1005f4efb5d554361a29f85ea10940d6e71f38e8369beff3563a660bbe",
    "0x23ce3a9a522915a281793977b49054c37d65f90b841e0ca90817bab49d79db4a",
    "0x06c2ed2be876309a9b3b44ece37b1c42382927dd04249658a3d41e3f38d5e022",
    "0x18b6740f72d77ebcf642b945ca2ed6c8a9853a3749d7fab6051e4ca36f44fc42",
    "0x1feacb9eb2a6878061374d069a9dae328369ee63e75a1b99cdb06a48b0d9976a",
    "0x1a44ee4565a967647300c75ed2b2543d8d45d5477fd606a356d1073bd13831d2",
    "0x041f3b3b5b1050c16bf3d62d87d5d273b067da484679103231ed65a18da9fe48",
    "0x1fd958cc4fe0a290bd0fbfb8b8a513acb5898d63bc0d7e585b7d081c49eb5659",
    "0x175daba07c5edbf84f09c87a8c34dd73325943a48fc12cb839dca47512561d2e",
    "0x09cf0a4e6e31dc24dfd5a5a27a77833e477d5b2d92cff5fc5ccad9528c43ba78",
    "0x12d49465bd4120cbf78e5a3414d44c6530bc963bd701c54d4c6418a6cebe80b1",
    "0x101b2f2b675804d3b26b2bd1e07c7365af0bfc2edf010916eefb39e28215d44a",
    "0x114fc65faba09a59749e0b5f111930783529a0638456216232cb7e5a339736aa",
    "0x1dff99b52799afc802c2bbf9b67dd044d3cb51017dc4f88358ddd67366d3a9f5",
    "0x290f4496a52dd4dda59edccd7325038bbdc0554ad3a9a0be7931c91062a67027",
    "0x091e8704663c516c3b96721d2033d985089fb992dca48c8ddcb97d7d15c7e188",
    "0x2dce22599de04196a0169fc211d0f9c8692643aa09728eadf6d50bb534c0e323",
    "0x29a7ff0720e170c0e67efde72795328fecef66daada5f0e2ca858a8c6135fd48",
];

pub(crate) const M5: [[&str; 5]; 5] = [
    [
        "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
        "0x2a70b9f1d4bbccdbc03e17c1d1dcdb02052903dc6609ea6969f661b2eb74c839",
        "0x2f69a7198e1fbcc7dea43265306a37ed55b91bff652ad69aa4fa8478970d401d",
        "0x0c3f050a6bf5af151981e55e3e1a29a13c3ffa4550bd2514f1afd6c5f721f830",
        "0x2a20e3a4a0e57d92f97c9d6186c6c3ea7c5e55c20146259be2f78c2ccc2e3595",
    ],
    [
        "0x25fb50b65acf4fb047cbd3b1c17d97c7fe26ea9ca238d6e348550486e91c7765",
        "0x281154651c921e746315a9934f1b8a1bba9f92ad8ef4b979115b8e2e991ccd7a",
        "0x001c1edd62645b73ad931ab80e37bbb267ba312b34140e716d6a3747594d3052",
        "0x0dec54e6dbf75205fa75ba7992bd34f08b2efe2ecd424a73eda7784320a1a36e",
        "0x1049f8210566b51faafb1e9a5d63c0ee701673aed820d9c4403b01feb727a549",
    ],
    [
        "0x293d617d7da72102355f39ebf62f91b06deb5325f367a4556ea1e31ed5767833",
        "0x28c2be2f8264f95f0b53c732134efa338ccd8fdb9ee2b45fb86a894f7db36c37",
        "0x15b98ce93e47bc64ce2f2c96c69663c439c40c603049466fa7f9a4b228bfc32b",
        "0x1c482a25a729f5df20225815034b196098364a11f4d988fb7cc75cf32d8136fa",
        "0x02ecac687ef5b4b568002bd9d1b96b4bef357a69e3e86b5561b9299b82d69c8e",
    ],
    [
        "0x104d0295ab00c85e960111ac25da474366599e575a9b7edf6145f14ba6d3c1c4",
        "0x21888041e6febd546d427c890b1883bb9b626d8cb4dc18dcc4ec8fa75e530a13",
        "0x12c7e2adfa524e5958f65be2fbac809fcba8458b28e44d9265051de33163cf9c",
        "0x2625ce48a7b39a4252732624e4ab94360812ac2fc9a14a5fb8b607ae9fd8514a",
        "0x2d3a1aea2e6d44466808f88c9ba903d3bdcb6b58ba40441ed4ebcf11bbe1e37b",
    ],
    [
        "0x0aaa35e2c84baf117dea3e336cd96a39792b3813954fe9bf3ed5b90f2f69c977",
        "0x14ddb5fada0171db80195b9592d8cf2be810930e3ea4574a350d65e2cbff4941",
        "0x2efc2b90d688134849018222e7b8922eaf67ce79816ef468531ec2de53bbd167",
        "0x07f017a7ebd56dd086f7cd4fd710c509ed7ef8e300b9a8bb9fb9f28af710251f",
        "0x14074bb14c982c81c9ad171e4f35fe49b39c4a7a72dbb6d9c98d803bfed65e64",
    ],
];

pub(crate) const P5: [[&str; 5]; 5] = [
    [
        "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
        "0x12873658ecf188d299b8ccd568eb14a4d4307c5caa95633dc296f05cfc966598",
        "0x153cf8033d8e8a15cde2c5e6b93da4018c5954d00a9274ec5ec6d5101ea22761",
        "0x09f15a882446823fdca6f6ab15dd8e250d90c84470516671afbdfb0de80fb00e",
        "0x167c655bf6cf3e0fb64c9075773bc862b24b4ce2f69c8ec198add2758a2ce216",
    ],
    [
        "0x25fb50b65acf4fb047cbd3b1c17d97c7fe26ea9ca238d6e348550486e91c7765",
        "0x27f9160806de9ef57ddb4243f839e4b7e8bb293ac176fdc5b5419ed73a07999f",
        "0x16fceedd703bbbc2bc6f1d792e501939105b044b1b904d3b110110da983ccdc2",
        "0x2eaa925d06b6f5a77c0d5cb20598742791495cec84593a57ee9fc4c9115ae7ca",
        "0x279b324735fbc883e24f191ca7039f9986115b9e6fcf4946cf45f08ceda2dc8c",
    ],
    [
        "0x293d617d7da72102355f39ebf62f91b06deb5325f367a4556ea1e31ed5767833",
        "0x097d71f1fd579a0d0f436a6b36165cd23a9fcab03ad25e7872cdb09b4a0ea0dc",
        "0x1a9fd26611128d592d594f51c251dbf4eff6dccecbcf2ebf310e34bed661337e",
        "0x21eb30a57e5912ab06d18573fc546b2bf3be840d5f5ede01f91dd2bbb578dcc2",
        "0x13abaf72889b31372b1e6f48759371ef65bc57d28ac2f60e6d227eb008b96ced",
    ],
    [
        "0x104d0295ab00c85e960111ac25da474366599e575a9b7edf6145f14ba6d3c1c4",
        "0x19bb8abf6a012cc7b8b974039c6be6df31446a51702b39a8d90ae4be7ec33ec9",
        "0x11075889bc0dcc9d6f06af3012f04aadcf9049de04fc775f8fa091702e70b9bb",
        "0x2e4cb25599a3dbf07de338827b28d16b9c8fcab8fffe8f2a16161be6a521a358",
        "0x0c7a700b33fb23fc642e0e8671deb84d05ded8ccbc968d15171182e158684e85",
    ],
    [
        "0x0aaa35e2c84baf117dea3e336cd96a39792b3813954fe9bf3ed5b90f2f69c977",
        "0x2b5d28e8d648bffe0fab59e3c7d983a4099fa0a4c548df0006e6d0f4e20206c1",
        "0x1a96c37c461ab8a38ee15bc2784c5096d30d1482e57c2f861bab95584b90d84a",
        "0x0dbdd3171308bfcd3cb8b8a676592858b8652e902142beb8fe4145002fba8e0f",
        "0x17ac4855f295a3b8fb8ceded7f4b39290647a0145af56b03b01e957808d66fa7",
    ],
];

pub(crate) const S5: [&str; 540] = [
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0351d582486c39726623750495e297970b0e19787b49173a9388a0d5b08788ab",
    "0x010e1a3beae297a472a31a3b51514c664abb12ec2d15860a29d2a9352d3ce8ba",
    "0x12395fabf1c14664faf3ecc72a84623c1d5cb7b5e5744e602c886a5773e5f06d",
    "0x09b91873151f00b299a173a5b736f73fbe2ce543f0b4d237565bd58758935cfd",
    "0x01d53cf618f93c90852172c773264b8f49e938bf22791cff829e95ff6942299b",
    "0x1a78e48450798918f254396fa7417bf2c5ff69259200c2a8d53af5f2c4d8ba1e",
    "0x000d3d4c1eb9828c87afeca8ea128d1d533750cf555c6b70d70a8520ccf16feb",
    "0x03af062fcd1ca71ba6de0ca4436f1a5a0698a3f49abbe4ecf3daa0ea2e4dc84c",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1ad1ba4f26d401924b25657414256b59767284a692897ba5cd53a7f5322005fc",
    "0x1133694747d2cb4890f4f5982564eac6019ca5a9091b302d2c10b87297041d5f",
    "0x1b46c42ff1aa475972e26f559a88164024234f7b392039fb2a2171be631bd8de",
    "0x1954aa0a79f14968c817000929e2e744262871011f238d986086e7d9574936b4",
    "0x07aced898db99ae9796fc7191a103b9de4c77f0e08ecea6aa593974f652ac4ba",
    "0x18a5a098d914f6221726d42ada7683a1605e20217a09489c9b2d84c3cdd2c39e",
    "0x13e00cf4ab3b1e028165af8d41019ca20a21aeb40926592a180f9806083eb5a0",
    "0x0478f72938b528ec79defe09215b46320801fb752ddc88d638a48790561b4e2b",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x08ff43b0eda2134077b96d7e4cc37a6871254910ab4c58a4bcc78c1bc6ce3937",
    "0x27d7fa3ab9c438b6ad1ec5a60e8ad91aad02e4d2908ff7192e5ac0cebd91f928",
    "0x1e9ac8ae7cf2b40d629999251be50d9771391326a664dfc206f2abec8efbe56f",
    "0x2d6b56b4849de82b636d81f2e98476bb6c35cbc8962137b615bff86f8f261971",
    "0x21e70566d2f4bb8728fdb3749da99a2143a0d90bb6c1b0d6d02125aa1fe63092",
    "0x1c01c050dd9b0b8ec8e5ee1eaecac1171bf69a8f3d477eb7ec3a605b010d4ea5",
    "0x282e8dde73a0dc74ee10816aacc1dba10c142109c14ad7954eb7b56ca268a16e",
    "0x0767cf96b16035a96d19fcc57edcd92e746d226cfe84b733454c7ff9a16d25cc",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x18974b9f253b6bb681f82ed0f2d3e6b4f70ca858468b7f1bd3ded1a581ec21d9",
    "0x18153fe8966abfc450a25222a6a27f6175fe851989776dcd2111a5a2de99c2da",
    "0x02da1e2e775539490c2fe2c827e65c00e382a4a5d6c49a8374381d39c627f36c",
    "0x2608589b9cd3f4c12b4e832e05fc5ebdcb403cd6560a8d7ece8d17ac94e79e06",
    "0x05b4b074edb1366d35bf1c1ec1451a36cff351b407a8d30d563471bde491f146",
    "0x0856cc5a00bc37dd0217920da66c5765dea0644555e35822d7fd464d9eb38096",
    "0x2021dde3ed193bdade457c9db5ab799e6b3fca640669d2f6295b4852f54d446e",
    "0x12e3785f05f36bb797b2c9f03c5a55fab52e88b0550b7155d6013b706574d41b",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x118084c76d1340b3980add4df3878df4ffc6e9fe26f0b5c4e2f9579ee6fe2c1a",
    "0x0b9dacae8623c514c622c85753ef7b994d9102ab46620f956c26e9c62fe53050",
    "0x0daea6d18a826bb2ba972ae16dc621cb8fdf9ecd531ee3c9f9d0b4012da6769f",
    "0x08f2a5df6437e253b579921fc3208b3c176e5a18dde267a4f85b7afb7f79ceed",
    "0x06a91d7c75e34fd43d9aa53b7d2793e4d5d70a5fecc5fd5653b162ba2631aa68",
    "0x207579e33c36af2d20d759996c313f78dc339878c0a289d5db58b6b3d6069c56",
    "0x25562540cd12084b3392c8cb8cda95ffc9c2dd6f8a75054ce16acf87ba871b9f",
    "0x00bbf47feca60b93dd0501ee0fc294c2a82b103817b4acf0af6979183afcdc87",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1e0814ce223453b24804a1ab4ce39815e35aed2fe9f7510e6288abb9d8b15711",
    "0x18f9aa2721d95963399ae18d6d95a6f81b78b528e750554eb2613d6dabbd72a9",
    "0x2ea329822ad302ab8831c559c64080e7ba6bf4c98ea0caf9cddd929bbb5875a6",
    "0x29910d86bc27b38a93bca80677a3647c01cb5262ed19cd0c00872925a046a338",
    "0x021c0a05ace45015ea895e01d630ce6b7423f3c211d26e8b6ef54d3dfc0660ab",
    "0x025e7c463042f520ed2ff8c68be30bdddbd7ea5cdd7a91224bc6a32a3f5c0fcc",
    "0x0df5b7e7663197f911e0dcd1ff4237ffdf080234e9b92201538ae7db6b6a7d21",
    "0x094d0fcd9592b4771d2b9bfbc2bd78defef3b6ca923c68382650f9d63ce37c85",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x270361108967ed0391a49d4b7cd6af9bdd544e8bf048658c4fab36aa12407263",
    "0x18bbf89e7cae93044c847bea654101914dbdd1656483e54e07ae332857821961",
    "0x04aa47a0ede64ecdfa83507a2b8947b4b587758d75239071f6b4d3d66777bc1e",
    "0x182d30ec988fca803ff7def1470c06aa6a596f56710184909fda17d354d3ce02",
    "0x223c27171e456846dffc59cb1a53c761afddf85582e4c70ebafddf10eb1f8448",
    "0x07d46dc97554a25edb78ea4d862c48bc5a08e9ea1eb369c5c8c2e0903114c915",
    "0x1bf473a2e982e519523b486d264941d8e32cbbad362bdbf736d7ac04c4d2a964",
    "0x12277b175bf54c3f2b0a57eb189e77714cf21630ace1fcf44d39397aae5b6da5",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x15c0a2cfffac7feab86a185031f489a9f83e89e3337a84b51dfe6fbb57feb15b",
    "0x2b83199ec584185de52190f5a415c1fbb9efd4bb9eae4c4e2763abcf99359ccc",
    "0x28601b9940a312c65b02adccb76937ef645d4e451c940ad4241b2b0f4925d7da",
    "0x1a187b4875be24a2420729e016901b94ec0566c8a6936978c3f21e8d611996f7",
    "0x10ed1fd44722d10bc7e44824e64978d36e68d56de2a465a0201b8e31065d5c57",
    "0x2c4b6867179a949d377a9bfd3efe48456f7e70f02d859c78684a3573486dc227",
    "0x15cb2c17aabecf7aa0f61655a8bb35a7afd87d0e20ac38fe21a07da7b388dfb1",
    "0x04dff03c742111aab3e61f4166a733e87699c1ffa889fce179316e39f7d845ec",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x17baac874eaaa88de70cc92d5a72e00be4ec0e5e99ba7cbac2b0d98cead394a1",
    "0x1dba338b4779919a2fb22ba949a050c85a73983d5ea4752cd73f664fe05f6247",
    "0x1e33e7fcc41f32f90de5771d69e58f4486290c7b856becd5cd967d8e7739f719",
    "0x10877ad7cf0652a2ff93977d3862e3ffb5d87d0c040f02a4f98612afafc9b604",
    "0x115d3675856ff59ebcc9110defb9d6c70df6af533d4b0875d0e5eec430350595",
    "0x03d74b961ba9013a874e7bcdc782f478da6097537549db7e6af4702ca749dae5",
    "0x2563411e29867500a8fd18e4eba3c9a2b7992e44d263c29f7e06000f74887cdd",
    "0x285501c4e0ee1b3c3e6b1b29160d6ec0f1af4dc2f36a4a1e654b7b47899738d7",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x209194489c86891b179e33103a81d969c5c75e941dc30e7228c04ed8ba68704f",
    "0x2c7b2835cb79c29852926900cc168b2315aaf03a89532dd9fc162c2f7ddad845",
    "0x1df181c420308c5b0bf00ee21c16f248edff686e9e835869d1022dcd4a8a635a",
    "0x1ffabdffee2481d8cc1233506f708d9acabc1d758bb99c329142c866ef4c7474",
    "0x08955ed55c2bec07027e4355a694a9b6ae1d9d50126563b29d8a074ea65540f5",
    "0x1ab4b24a4db7c5758471846eb375163e7587791417cbc355b6ce93b64fd01da2",
    "0x25a3439d2838ad459270bc633164f3a68215e11217eef1d605ecfa8b1805c609",
    "0x065240d63179ae83013295a8251fbe17dd988ca5c84761ccb6a6ecb2bfbf02a6",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0c1a91ddc1b24113bf876a2ef895c3315cd1b109cfa569b79f3155ee12b1c564",
    "0x146fe8e28539ae36ae921069f4af83f675f1b68399efceb18989cab5fdd36ac9",
    "0x1ba8c3cfa46425412e30790090980db139810efed7bdba7a38adf75e1a0d3641",
    "0x083a58c9d889b74e66636bb8418db624726b0f1374f59eafb4d269ba1ed234d8",
    "0x2b812a76ea526ce18df6032192ef033541aaf99d1c61839a0edf0336142a25f3",
    "0x295f6d35fb9e57a50a5d913600538030ba8c09e021c16aa8634488cc8eeba645",
    "0x1de69ba07e3b9f90c87eb67b1f64660c71befe5138061dbebb752296032542e6",
    "0x24734fa363e52c64ee0162a86578ca899796e89caa1a3a3533b0965665208f59",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2d5fb67efe93e8386fac071fe3522be1dade9dbf1d1030417a7b51e3122111f4",
    "0x19522e9228feae7473e317fd7958a021a0b042a81b75da6dbf7568b857afab75",
    "0x2bc3f6f0df0c7305afe83fd9ef0b708e129fbe889fce42cb695b33b290479342",
    "0x0783e5635eea0e623bb8c406909f0db77ad4f9302d4828b51015d6512818690e",
    "0x2d61b243f02e21edaed6fd2e4969ddb95a6d0da8db17d115a9a3b0d8885bccaa",
    "0x055e1a09f4bd4809a86e67f99279fc06ca89a4468df1ea25d76fe0ad36ccea12",
    "0x17871eed22b0cdd2de61e55ba5c9f4e37da63ed0376420bb1ee7f077a0d7a85e",
    "0x20fd0af1329bbdd70d4d835d18c915d98956c5f0a4252cfb81c1fe02fe130091",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2e5b840ca8faeba6ec3613e22eb7b071d9633c83cef659ed96b2f6a8fcc6b262",
    "0x05f5385703edf7c4a388ce585a81fe7cc92ff49e900b5601865a352c61d6b111",
    "0x21e83ab5e95d369ccd30cc1c55cd5844cb1cc78ffcf0c8bc91c9c0d9937a3fab",
    "0x0a67b7ed9c37946306ac525597f1275b30a5d004ca50258c3d992284d90d724d",
    "0x214f52f9f73a2c2d5425c9610461303d839dfe71891489c376c2ea3b5d868b27",
    "0x241e0d267f7d1d899656929cdebd850f70ace216d9ac10253ab720bf40da0c7e",
    "0x2229153475b7a6b282e110b10e8aed1fbc2a05a37352e954f40d85205fbd8bef",
    "0x0f30d0b7cd8ef10e895cdfab3faa4f4c1a61a5f4eba688634540619c84782d2d",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x265589a340c71d49e1660d3dd43d1869408176d8b9110ae8c369078de8ff7aef",
    "0x1bcadf844bd1a2e7f4f464991dd651b9f15630c94977d35ebc3e85801252ac2e",
    "0x0c112b1c56ea288e8518cc039fe050649cf40b7ab98de8fdbc56eb7ef6bcfdde",
    "0x0f020b9ef75af8ddd505cd3947e11a04270be15daacbfa76fa04d9005283aa77",
    "0x0a426601ce9415e666acbbaf2a7cc8ef7ef7d07538d84b1a53da24c19c601688",
    "0x10a1af65503614381fe2003123aee9008ab97d69739dc462e72a8be04594618e",
    "0x2d792f9fe5f0ad658dddadfe3893d158012d84b3837b7415e188131595b060d2",
    "0x2daa42d04e0b62fcb3869031bf382c3b9f8a98f7f5bf7421d0b63c2598f5f65e",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x144c0395157a1bfcfb5cc4187f271096784dbcdbfcb6a28c31ce8a06f908c0ac",
    "0x1af8cdba0eccc83c16019622667527645e94c9ce64add4415df7f40446277a09",
    "0x213c7a7ad6237e7211530c210a8d6f46a25bee433bade010591e6adf42fcd906",
    "0x224f1ca24803c0119ad0e6c41a64968e064a83f5821972f2a5c9d5895da4ea42",
    "0x10944d95ff5a3699efdde41ead13344937e3b1b93ba73a1531246ca4b99aad2b",
    "0x0cb2508b0a3395fabbeee5286ce5f1839c006ebbc09d94f475924923d8079ec2",
    "0x284a14b1007ff6c5c0f8f7d8d0e4b19fe2d4a7094103912134b0f563a672acd1",
    "0x2bc0bce43d55bfe1a27eed426980cf9055b0dbd42e8de516e77580b9d9a9060f",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x28e9b1884a4619b38b6f8a384368c358b7f210f3412c4481a26ae296f73c5c72",
    "0x2123ca1f119a35e7d4e1b323fd2942d12ed020ccff3a7ad6b65af90457f00614",
    "0x04aaffb0ba008fb9a82fc0700beaab2ce39efa895acdc280252f01e31035b8ad",
    "0x1f1e16f8ec9261c82443b9b31cd908015e2c2d2314629a22639af1f37e1073d8",
    "0x134928ff5ebe5e019214ef937b7f7a28248285d583613ea2bedfc66b5e2ae924",
    "0x087fc99e11e63deec9d55047ac98030c57a4f09228cfa7749a3e1c7ab5f212e7",
    "0x09429bcc52d6c43814df5b07fa116f8875299500a36ef791b592a64e27cca486",
    "0x2267b1dfa5d26e6f0a80bc8b4c0026f0204bd4fd06c7725544d7760354e401f4",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x16fb3cdb76d21d3448c9988f428d198c8e5a640035ac2caff7aa7964b34ff1dd",
    "0x080dd9d263a6698479df06bc98fc64594478028b61047ff93c425b29b092d37c",
    "0x165f4f2d302a24eea5f46abeec4ab03d21e3d013865085e515bebcb2684af340",
    "0x0a8a3f3abf28f457c62045789fdcd302f0df1049b6ec521db2b7e72e8d9516cb",
    "0x2342f103587a005c977578b12810378f9014bae831809cf7ad59ef3aed48aae9",
    "0x1d1308e311e7ab846e158769c12213013eca377f396061aada6220f29eb1b7d8",
    "0x2563949aeabfaa782be07dad903ebff5c913893761b75a3f8402a1e2bea5a998",
    "0x0cb371898d8d2e1f5bbc32dc21782704a73e415e0c9f6387157b48746bbf6ebe",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1231d40e7c6fe5bd47010ebe4f63d186369cdb6e8823aec194093a0b4cbc6845",
    "0x018943696a4da551747068255f57a0437ba0ec36ad7e5c92cbed9c49a9775b97",
    "0x1fa58f378160dd4af40e3b01bfe32dfd34f2cdca527973c194a53af30bc40670",
    "0x0c976561eeade533c5579041bcf5e8272e4af95efe3af9e5372250fdc5ad8966",
    "0x0cacfeeae1a8359ae9fcf831f315a4b8c576d579eae86b1b09823656231d3bff",
    "0x109b0647298eaec354e4a155308192b5facfb586bc2fe63f073cd221a2106fb4",
    "0x069d4744aca289d123baa0e6754c5232202dbcdfadd0ee8d14dd19a7bea39781",
    "0x156195fe27df23b8184fc58a30e1a9bafcb9cc9fa9ce071163a26dccfb7c6ad0",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x20fed35942cbdc86df51a49ca26055bb25e232a42476ef06997af8911560fc12",
    "0x0cf20343957a55345423dd3450c2fd74039f1a82c6c02446dd64c4569d31471e",
    "0x1e177139b05dbe38a56c40f919dc1f07126bad03049fc4025d77b4bc34c25ebf",
    "0x144d1944a849fdc2aba8ab2a4368d57911e9614e3956d9326ca493c83050e932",
    "0x162f08d305fe4f1b0a9bb1acf1223bde3405aecbf2356508841b85f1180cbc1d",
    "0x21d68868502ab599c7c5f2a54d65be40ed5caec1613a98b2a98c5f8117415d97",
    "0x0984adb0c5263193be4027c68c6f3a6dbf7e22cf199dc4358b52968b0a248789",
    "0x2883f3a940a8c10f7f347a8011b0f0d7f6e0a4a82eff568fffc7524235d1e4f3",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0d89a340993be3d3ba07d2fa8432d412730e8ebf2bbfacbf9378c0c4d3d1e692",
    "0x105e4a12836770bdbab24c85e7a63572c77556fffafc8f55a0e3f6e7383f7b02",
    "0x04b09e851bb6dbbffd0780af3f99cbb707f5e8a073810b28b1b59794c8b117a8",
    "0x2c8031907c10e1df2bfdd2589dd502a012a2292202e67954091ca57d21906d41",
    "0x088a360cf4c5e26faddcba291dd2553906abd82fecb0ffaff4f3f544f672d703",
    "0x0e9e8d8ba62712e7f95840b5651f32912e84f146bbd57c566c178084cbb155f8",
    "0x038fbaea7dd737c642ec414759bdeca4250d31d6011140e7e45e86c12c6f6fe2",
    "0x096dea6e0d6411dd0c18e516511b03d8506c4901c52dbc2772c3d47bdbf461ab",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2d60fb66fb133b0507b6b41ed7fbd5278c4ba9fa0679d2889da9672d21f07037",
    "0x2567f444cfdbbf4d7799d5b50c8c582e1d2038a11969b3eb2b60aebafb1efc7b",
    "0x2401d941b4fafe3311bc6cd9fb0bef62ad9b59e731c1ec4e6b0ca5e2c685bb2c",
    "0x28747741579283853ed4e6525da70a4312769f7040db4f098eb7d9214fc8fae6",
    "0x1104899fde3f530cf99500f20c4fb9d479e512cd70a15def442a4ea92bcb9743",
    "0x04ddfde1b1aacb33977d4b3020db51b834f6197a18505e3ccfb37fa8a3a8764c",
    "0x2bfa6913d62c8aea04ccc3e50229220efe3b9af6a568194ece56c065e3cac8aa",
    "0x05cb914ec7b72436cf25adcbd0550c2db3c9c09aac565d46f96ac156fa72a90e",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x145dcc8a89ffd8fddf4e5bbe377a3b7649ab6faaddf5eb580ced3e0421b7077c",
    "0x21f1b7c169a0744e49718346cbd390dbe3287f5de3897acdaaf2e4bbc1f3e80b",
    "0x0eeae34b5e8e48d2ba6bd062c803ced1dd1165cce5f8f0574ff7caf4e6eaf6b4",
    "0x2827170c30a7f570a12f37aa0434e01a4aed9b5d37f1815029d5de89a8ff75e2",
    "0x0e328161a29c0376af526c8004597fbe018328d6d0c89503eaee36f59a4cee8a",
    "0x0d6617ff29ac941a779f907e749603cb36778fef6644b8684fa40055c8d978c6",
    "0x169506e0877092fdef32109c064d251c4d6a50257ab9c032bd79801fa23094ba",
    "0x08c516740479e1a852294e8cbbcbf83b4d7095b69758aaa9f1a368004dc1742a",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x281bcec4cbcefa9e18a1aca1dfeacd7f7ec527df5deb6c002f541ee4c0f2bcda",
    "0x13ea58a6a82bf43f6d4c2619b87da0ce760410b68b77f694685e3f34ff47b86c",
    "0x1ed604569bf581c71e4180d59a78dd48e2103006ac045566e44162656c36080b",
    "0x15d25d19f8fb93c9272f10ea525e787c758f98c5bca884e6317ed21a292abf6f",
    "0x1696701143abf5794f370a122fc60dafa4f0c241e8607983222bc72d1d8d1439",
    "0x1471c9bea5d880676ffb53255487c1af57a0476b77eba56204a4a3780b109b50",
    "0x1ec18e953909ee6e34dcbdde64fd6ae8b99817ffef4811551a27924b714cc00d",
    "0x089ad915c65eb1cc1633229dd97f098a2f86e7ea44ee6d94f3fe5f08682c807f",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x007e3bb22a5d8f517b12b42d68ab707d809ce83671dd9a933313d251889a9d55",
    "0x142b4285cb7ac7249975ddf59d177aeed1a94e0412002d83861ce061e3f38621",
    "0x24839c6f8fade0c2ef1e248f64c4d81e324caa4ef4052916a31c5d1da484ec43",
    "0x0ac0879ac864dc7bf40955a3f4a19cf37846fcfa9289ae59c8f8c7c174c5a57e",
    "0x044832eb1eb4ac43192406deb4a37ea61e2d110468762d3a31f01f3c6c1f8208",
    "0x2b3f948fb289860a26e995d14c6f8aba2089511c7ba58a310e6cbcb533f2dca2",
    "0x118bfa7e2d1386301f187c1b1eda2f48c0a03de15e370b5be0f431a0b574681e",
    "0x1399fb352bfce7874d22e0fcb24553b96ab59b85364c0c3c9b0135d4970c2349",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2f25d0089300da1d286c5efcc9cf22d095af8f615b76cbee09b9ba651d737311",
    "0x084eaaf7a0b07cf4992c7d05790c42cc742a7bed021c48f614b988d99f141e3d",
    "0x0cbb53527ad34cbd3c4d59504fa47c87eb5be078155e58ac3f1e4b3f45dd1cec",
    "0x14e8e0d80d2af6efd3cc60741cbc21f6da3a42e2429322bc209097b1d22d26b4",
    "0x149dc605f3ad39d4b470a132191d2739df2ad19fb71e067f6ede3f9da3172922",
    "0x1533cdda4fe346f0a3e538172b8d5636d3b4b502047cb268015b2088f12b9897",
    "0x1da21ab47505b1ed4358160f3cd24a01330718bb901beedde8cca37839805c62",
    "0x130eee6229e6346096e121bda6bd3892aba85c363deda16ae8c8efc6ba721b18",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1d0669bb3cb83ad8702a76855510918ef300df2416cdf04a83061a915a6fbdeb",
    "0x113f0f0db699267055417d499467b7502e23179a0c23787b7e8130967c95080d",
    "0x28cd66f5e2046799405a9c14282070ef66fd409507971fcbac16032499bada61",
    "0x230173d8146362d28c0cc9bc2c72a64afa7741b77653726017932821c1dc9502",
    "0x04b23de911f3a1d3f32366c35a7f293837e1e7e8287b8abde423b2b3ab81c187",
    "0x0d4bcdd5ff441637f977dba6d523ef1f6178ba245cda76e429a91b0ca994db04",
    "0x093bfbfaa8f3a8718603066321ce48219b55558f33e0f8645a93a41e6f4d3e2d",
    "0x24e21e25f0b3d0e754bfd0e91e62b5fcd232e756ab34cbed6b4ab709dfca551a",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x146990fff0e10b8d70a4411f57f9e74a03d2ac0127b216400b82c8c644038303",
    "0x1ddaefaba77bcd9c5ba0671b0a34a4cb37b7c689bdca187d90212f188ba4a87c",
    "0x0a7c37e8eab27e5edcfc3d6682b0267e3d9250fe470980956f5e3e5993ddaaaf",
    "0x2d81f6984b67d7cc74b35aa9d673878f05d517085812190798dd24a510b8d6b5",
    "0x07c46458e45e15ce1338bbe98ed3c0726664d8ae0c965bf0fc79ae31ad04a349",
    "0x16dd83567c7289d8ea0e62df8620df74f3c987d5f162b6b0a24ab09837b5d2da",
    "0x21819b9d78ef5e05c535a83e7d709f80f3ab5e8d733146139015ec4e34b29f1b",
    "0x2340a29e4e4d4e920f39a6a32149b54307f918a2e179e6c7288cd02834c0e44c",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1ced784118aac9880c9fbbee28972453b36abc3d967b20e9b0a886af86d64305",
    "0x237848c6b0c87f794b30cad5a3cebfe2c6c9173f7a258f4ea139252338a3ea5a",
    "0x27c636aa956756d9ee04b355abe2fad8d703b1721fcf73b17a77751813c8abb4",
    "0x1b40358386698e21d43bd3950c00f81d6ae340eff9ac0821a213f8fabd142d09",
    "0x0695487b95b15feda7188ab9bd8072f0edfcdaea2dfbe06596f8c037bf52145b",
    "0x1df336831b6745c8f22a80c252ba12b24e2bb1e7fd3615cc96145d898dbf3220",
    "0x264b7a66fcd41995c19f021b71fcb1abd59986c55377a82ad92e79a1165e58f5",
    "0x208defb2122d53224aacda9868250ca3b39f78b13c9d150a14d75a886a1a42bc",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1627fe11fe92ca5b0841cd804a211151ca6c0d2706b2a17ec17a7fd224a48a13",
    "0x0d483b82a1ed0d6788ec73c257cacba9738eae7232e365df112b15a93459627e",
    "0x24c490612a1636b43f902459851afb3cfc37d71db5e9ffd247116d5cbd34f9fc",
    "0x2f2d08c8cab748b056307066141837d5cf195104459a91084768548346c8593f",
    "0x042d3a4f87d782326b0c097a03de01ac1698954c8f300af708fa79a92e84790f",
    "0x2b064fb3fabe9deb1593d253ecc7a12fcfae3193e8f7e16ec563876f92e4c62c",
    "0x22b8060d8bd295c3a201655ef3891a481e21748554dcb7613ce6c0a532628e5a",
    "0x1526148f85ce610667aa96af20059f0b02c8a9d4d463b27f0711db72a545503a",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x12d2a42d255875bd671d376e499cd79393db48c414f967d53388f60b4e180986",
    "0x22d0f27c6767b64adf2eb09ed595e2f2c211a3504a8de66ac01991c81c0e2669",
    "0x1fbcdf3ca6f2e0739b571248a9a994ea913375db065ed255b5eca3fde587dc91",
    "0x0402b7640d18feac0c700cbea0d8f527a7c3fb44a110c4d7cff21deae9a70e40",
    "0x27f6c76f1b519e71c3888f1ece7cce4e0f99f231ddccc7798a31b0dee0c68206",
    "0x2fe908cd208699c9d8e3b0c09f5c0fd58716d0eb50017aa7d12df08b53d963ff",
    "0x1922a59ac83c1e2821afccf1610aa5fb0b3cf8eb3fe3f4957bac604c177fcffc",
    "0x126fc5609db3cb254a05919034b8a7f9a0f85ec5abbde6f85068607250ea0ac0",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x28db35e17bb31e5be954d69f5bf8f6838651bb6f5c80f750b6b7017643b6c28c",
    "0x26dd684288015065728c5e09454535a33e1537761d874102bd4ecd2baf40b384",
    "0x1895d33a312becc17090e45df74981b4fc4b220d3aaa346c7e8485311cab159d",
    "0x28bff25eb0f2a5c6d007a92a7c4d88bd9c12c5622d0ecc5a509c404048b7b5aa",
    "0x130136f07c7e09acd49556f3a6bf0739c9efc0a1be738453af67b31e845c976e",
    "0x259c455761e6b6420dadf3d6b64eb65493f989fb3e5698e7307a6d6075714ede",
    "0x1c9ac464fb08828d02006c7529eb1e8f45eef54405ed2cfaa133bd697f618929",
    "0x060abe65207efd0fda7b24719d35018f7607dd732e71c05077148f3d046dd180",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2a41f347b5f6eebe8969667071926905a3e6e521b85a89006ec2f500ef42b000",
    "0x17840fa3a180177731bce340ffeb5a3b6a68b94e3f870501e787edc5a94db63b",
    "0x161ec94c3f624f928eadb0e2f2cf6b16430fba680a5a50590d89005a688d9b18",
    "0x22d8be171b4571fb5b773c3a548fbb286b06e2701ce99b7630866e1bca6e2cc5",
    "0x052464c9c7ad14525380aaea9b06e76f03db8edd220f90b03a9feef2fecfb978",
    "0x0bdee83b20d91ff9a0404d8b0593879c90f7be5a95a22c8e1b157d92c3cf4746",
    "0x2d84235b4f4e04262d8f246123b8e631ad51a4e1051f41f1c89cc42b61717302",
    "0x03d6b62f816bc4b464e2971cc6a7c1a585e519266c4627b1367ce7963cf93d86",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x16caff6fcc165168b3ed958d3aac8d09f98f670bdbb847ec0e9083a022d27692",
    "0x2cd4beaac59c5306bf76ef7e06c81adff6de4bee730cd4676e966db45fc067d4",
    "0x1b11abd8ee736830ffeda3782fc7a82623ecc5afa92c0ec9eeec58177ce8608b",
    "0x2c80d3430e64bf850c9e10a22f6b781fd513af20d4705435bc870ec8cbe93cee",
    "0x2d2f20d2ec0e52eec9fc2d0e49fef7a2454aa77a5055ebfc4d4449e8f83bd015",
    "0x1e51c55a8d7a04be4edae4f7dfe6137e96370ee2a4ed459ec524b19de646e0b0",
    "0x13d4327afa809e26c8f97e36ebb5be1d3992ec72d459760bbd25659790738f43",
    "0x176222f47d8c0ff9e8a967920376793dbdb9dcc3a79b44fd25e1f43a755e6b81",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x05193cbcb59713c78012ede93db828e69336a197fdd30c6b7d03b1cfcdd6adfc",
    "0x2bbe660fd34f6ac3f2545cba9f717d2eae9f8c60242851657f8661504a457c69",
    "0x1fe59c3d2724f4158483406e6cd62aafa121c451f13e48ab3c857b2293333c3b",
    "0x249c893f9de208601de45c9769ebad071eb864524003add0bde31fef7f4f91a7",
    "0x0c20c4a12bbd772e0dbb929b69b24751da26b0fa8639005ff786a25ac1a5fe96",
    "0x1a0750fb1d27bcb326ceb3a3065a487cf7d513d8954f31dfb174fc5ed95ce55b",
    "0x16d40c0ba7a7aa232eea997d45ec4f0567fb6814677b262aadfaefc91d409cad",
    "0x025ccf860fc7237cc8721aaf1c717190db40ccd65bf65d108b16f851cebca736",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1a25b1a6b81926e968ffffa63979c900c1e82452c986ae599ef991ba214e6f67",
    "0x2b344bbb50400ea76151bd0b68c3139955f101c701d32befddcfec1ca72df25e",
    "0x1044e69af594eca5f9ca7ee28cc38d161d01037fe223412e2f10838bb9ffd1e5",
    "0x1145f6f783af7d1e0ee3388f107ccc27609bb8314bce27b03dbf8d02843ab2c7",
    "0x20ed7009a6093b160020318b0bbfbc9a9d14de64a3aa25936ddff0ffe3a3bc4b",
    "0x24cc5ed4ff9d84fce95c1508e1c7852fe60a6def592f423bb79c229327be7627",
    "0x1fc31b0e67cdf9efa9c0c312afe54b5158ada1511719c76953587b772f1c830c",
    "0x1faf997032cbbadc0c6d30fc804d068faeccbdf7cc90155395b739e017081259",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1197c402e5f0a49c8f9b9a41af6fbcd013cf9adfe864613c1bdecb6201d9651e",
    "0x03025d698462f4cf23c7d4d8a3eec4aa8e1a2184a43020122db653afc6d0deb4",
    "0x0ecd1d402fafa3602052ab586f804ec15f1910542f35c608eb7a247d5a960cc9",
    "0x30021619d0c0b402b429d4e962cc3c2a2d00c62c131144f7b3d7f8acae6975b8",
    "0x2bcd05e889bf0fcd9dc4f5faf21c506cde15c316aaca47724e71bad0cf34b27d",
    "0x1b890b4097a781900b40d9c1ffa06a5e8cd05ae8fe52e040db0e7085ca46b460",
    "0x08081b53a974ee264310b279468093218cd5e5edec1b7da6b21ab35622242e48",
    "0x00e6632e8ec976cefca5b164e6c07ab40ac611fc723e8d8a14899a4cf4be3b2a",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x063a3f8dea9d024a6f6a851ecdb21bffbfe259ac17f6793c91e73823a82f4f76",
    "0x23b2c6ec9af5d0188e75baab9990f663f8e929bcdac96cc09c4c0626274692a0",
    "0x09a41c06730fe53d395c602113f1607fbe01425190d50d56e9f215658ad128cc",
    "0x16571048fa92024a9345a0ffecc159e76602455a71bc7e9c9c01dc50d8aa1d6c",
    "0x2a5a7e76dc76ad78878b3d3b4c74995e2ce77bc126e4d17db507161b049eadf6",
    "0x0a23738e129c11b285d81c1c01e3f87989c87600727e7593af45607f98fb18eb",
    "0x2ce8d6eeaf4d6c7ca0922c4738e81dfba227e98fc3ed24e7696ebe9c2732a1ff",
    "0x022e3bfb13d10368cee5175f5e2a2cc205d28021caf5fb2898de2389123178a5",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x066c43e71903c5b74ee8e90ec30a1d8cbff7d8c85d3c7b995a976036eef8c4b7",
    "0x2fe5dfcdc9335f0c0dd3d08f4e783a5ff6c2e6fb7e2928840821e6da8d91570a",
    "0x009accce03257f967a24c11ce718f21167d9d71a1cb60a4f50d0228418428300",
    "0x224e2a85316b67bf2dc64549c505721a7858438a00e793fe76b961bfbfb67291",
    "0x29f1447b45128f5c1cdb12a334509e0a991c0d2c9360a5cfc28af420c2ffffe0",
    "0x1301ae5665bd3e87cb647f566ebcf2f2eb5bec4b257a77061a15dcc7b8b34abf",
    "0x0fc6599ea957e02f69b1ca585c7135425a6825867d0cdd2b06019f3c9398ba4f",
    "0x022e91a30a945b960bd87d7b0d8290dcd5f5b1caa339c41aef323be1ba9c724e",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1c7c359c26eab655aa469e0f9a8cc3d8c7a8149ba9e9baeca9233b7edddd1d24",
    "0x1ddf651a5d396b680828eaea1f252625db1988504765eb4aeae3274a19cef175",
    "0x0ab486e3e737f40898d3fdd6bab09213c0056c2e090a90acc754574739159385",
    "0x0d0b817b8995913e3ddd08b576951bd47b45f536739fc9cc782e769fd17e0028",
    "0x13471abd3a25160947928376fcd79dd5aa58672f8382745e3a040c2acb464974",
    "0x07bff672e50ff1f20296b1838e5270229a7477110d9a7fb56580371ee4ba38c4",
    "0x23f91ef1b8182e80c8a0f54c3a35ad51cb9a3bb61b07b3e34386f16f7f4b32bd",
    "0x16c390b3fdf09c6c42e50b66557532cc5998cb5a8c15446d31813e7b70607ec5",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1976d21aee74f79c60d44e46029a5b04fc03ebfb9bdb09a0b5dbb89f677cd296",
    "0x056e7cdc08bff8d8bc12dc72af3c84858dde68919cd991bdf513656eb0a0cfb2",
    "0x22b7992d7c0ed349aab7531de2f12da4fdcf961215ba06f2b7577f5d42bfa85e",
    "0x10f97fcc757a0d6d0d4e2d585ea5968b3faba9d6458d16bd366d081ab65ae95a",
    "0x21bc046c3d727baf6e65b568653a398aeed8c95b73567feca3884a051ac001a2",
    "0x0e757fd0b77219a771723e071c9896062eedbb3da05cda25d39ead3cdf738491",
    "0x1ed536c497ff36f612f326f3d03e97d30abf91605ba686af36ea04c19cce4f4a",
    "0x2491340ecfed3f98ed6fd566034240e64a08e5a39a468c78b31e4734a679bd67",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x144b73c6f361a4c232674a08616b36c33f7bd667dcaeec35530a2e8fcb66103f",
    "0x00b244143540a248840ba5fa161cbfb2fb2dab97332073042cbf8a932144d27b",
    "0x0b5bedd8122560caf5a9dbd69f82f7439543bbad397d7cfb4ef7782f64ea4e12",
    "0x1386c7e88c5c0bf880b28eb2735e221c2a88e7f871ca5d720c99b4287c528a67",
    "0x277164cdc5187613b0a6d6450b56cabfc828f20dd7d07611edccbfc3d381c9ba",
    "0x016bc97ee1ac4b1cea8f96e731dfa610212aec4a193015b94b0f2a1657d41f13",
    "0x0b341e4361f31734af9951c20a6aace08a3dc80f57379add9693b56b047b3480",
    "0x263a060ba49fe4862df997994261e665c0406642c669c32dee4ae7a153fe1dbf",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0df811b70cab32c0ad0aacb576fd95b23424d3686d79e36feeff21d1aa047eb8",
    "0x00afae979e41c0cf7d662b4cf09e93dca70c0945c6759c4f8d2c935a6084eced",
    "0x21ae12f1dbb152c33213efe9cdb6044574b3df8236be92341131435152115e5f",
    "0x272fd8955a7524a09f77c28ce89d58caf7d883f9e4503ad6a37c0eab6bcbe468",
    "0x03712cabfab0f6f3d23ac7beb815226883f409d60d798242c6d5e9dae8178fa6",
    "0x15bc41d746b14885ba93dc7d00594ea2f174b3b3dbc1acd774335405c18b154f",
    "0x09dded6d75c33754be1c1ebd2dbed077c1f1cb80938f0798bb2e25b054a52962",
    "0x1d9fd7f273e141e48d7ae825a6d7758e351d80c4ed50139a659d52edff60d227",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x00ca2cbfed626671d6e0f2e3d1b6b2ebb5e9048c2f1273223c34fe599429e1f2",
    "0x1e9bb2efac004014858166710da5d764ab36b80e4e97500d784fe5cc2326fca1",
    "0x23f8af81b77d2f06d566eb0d9096c4b267f498f92bac69d622dbed85bc8a8ada",
    "0x11546811642965c71b3865d830809b7f402e02d1980c3219c4bbe48e8bd37811",
    "0x2b872c434320ac521ac1e14867c05d88692de6ee063f402c28cba02adeaf9c51",
    "0x1f80e8d09a04ffb20613cd83ea35fc1593f9a5d8db6c846d80dca53cd4ba5a94",
    "0x117c4e17071565b51a2b97908f375ca0194dd595e9e873e8c0a158b59684ac70",
    "0x14da94b9be3adb3c5f7cd04dd5c58f63e74245d5a1e6fce5de3d093d476f08a4",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x2ac96264771dd5b1762078d5132db23febb0d2edb19c7b24848d4b654e9ce670",
    "0x05a23e8be5fe8e01b11d0c7a1dc85c909602604b15d620c7a51e2b017dd63830",
    "0x172623676d3d38b2c68ba2b30c12c5818d874d83a98478cbec0b1d27f5dd7ece",
    "0x0b632ee1e8730d509691580805b890371ca2d51bce083faed1615a845481de7b",
    "0x2a220ef566e4d54373e1a095231c10905a2f5e72edd2b6259b46ea45749203ce",
    "0x2ebf4340ee05460d8298d52260b4ebae389357bd857cb638c41b2708cc333dc8",
    "0x27e873b1750916366d2e7906ffe4f42e6dd7545bf534adc73a02b7410f7f8275",
    "0x1ee70cb51ad6da4513ce42ff200e46dfa39992a90447f1004765711f3f5ad52e",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1021282efc84669e4a98956e30ad0043c6c19dfeb98d6d14bf027bcfa555f8af",
    "0x1f1c2e424bdeadd277162d70faeb398d661225414a975a59be613e47274b73c3",
    "0x1a71e415abc5ccd5bf268130070e89b1e61981cd54f6e5864b8cc4e1d50bb21b",
    "0x29799820e28bb9c0a7bd0a2c6d6105e5c91f8f88b2823da7c57825067214dbb6",
    "0x017377cb0195b95b473606c81a6bd5c807b22870afa6cb230a1048e9515e31db",
    "0x2f73cf9f22e0431d5e7bbd907ebeb8553b4117ff1fc50d09fc7b75935ef41251",
    "0x19cd57e77a99328260bd31fb993e7bb3fd27fdc21b2187fe3a4bac0ad664719c",
    "0x0d5ff1b6b5f33d6d568d9197d0df40d07abede20ae3a94a0292c01c304012713",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x26c7615e04be2355af0773fc0e025f86baab5f59d834ba005e099d95331d61b0",
    "0x170ea6732c6d1b2ce3279f2d4990926fb8d279e4864d966ce6ee6c319739c2f5",
    "0x2f870269a506f351fb0b9a9d677bad1bbc5e6ab40ff0afc1772f02ba395fdc8c",
    "0x11986790a1cc239c92bd4b8d8a1b9baa76e1e49f847f16ede5f6398aa83e97c2",
    "0x2510c2e5a39cd6c243ff590621941b221d2a2c5a79ed6e5bb90eb1008219239f",
    "0x1ba5c05a828609b93a7e151338699af0b8b0aa96d3d5cc9e7d3785333fa03dcd",
    "0x08648c03bd03b5f4dc3868ac1c47363d90010b9cb19933554fc7586b97b5fbda",
    "0x0069d0c72c5880618f66ad58d65f09e5fc488697c71d92135be291f55d496cb7",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x091acb34aa0d03afd0ea47c1d56965a9051b05eebff9af71e07c4554184f462a",
    "0x2b3f75e8ca7118776d9676fe058565eb99b6e99bd23505a8fefc927e17cf5336",
    "0x16d9ae82c0073fe1dcf35384c0dce87494b2400f9027ce1e64ee440a439fcbaa",
    "0x2a11becd9333eb48f3027ad8f3c24fa1a0ea671a1020278ad84c863c322e8057",
    "0x0d569be295d5e44ccffd9d3ba84aaf6a0c178e8639689aa6c57214f00a6a9d90",
    "0x0a66025e45040fd45eb136eccc63e2d7fd237aae9b62e2330aaaa0bb44dbef48",
    "0x2cda68234c7e22d8fd725d952d3c529b6997b68dc02065f6a047b6cabdd29e42",
    "0x1f9ab3e8029afc72f56af02ced5a6b145ebc81444ed12e82c7ea547e9ad23650",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x18a2e32bb69277e0f5e82c2a60a008b3db5caf3c53a669215c0b3493b73c7138",
    "0x224c4f2e98b4fa10d4ddc83f26ada461e5b4f412f94a1eb153be707470746fbf",
    "0x1b2a8787e954d981add1b123a6f6c100a609e8135c0781ac9a1e7e326c4b0f4e",
    "0x2da288c34f32d86d5dfc0b2dc9891091d396d36de9f70589b7beee769a058622",
    "0x2e24d351b0d0e94f3e0f83eb60f2d476b8b64dcb47674290e87b27eda7f20180",
    "0x14af016f9da2f982e82aec1ff6ee809445db2c6d85382f959508a31830dce9d7",
    "0x091aeac9bde9ce64a54cbad523032180c2135b51ec4547ebcda08824bc9cdf9e",
    "0x0caa07eac62d9f07c17f63f749b7047eaa1adda97f5716d76f23affd6d845dd3",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0554f06e31b164d9d7ada3e01c4bbf452fdccac121ca787b08ad50dd2928ed42",
    "0x0bf8f8d7702b1e8830bf126dc420158a624359067a0f6385068390b01d176601",
    "0x1604d181baf488dce4f99bf63c065ed934ee29f0649af4dcc9ac2a2887e8690c",
    "0x0ac951e2944f7532d4ddce72d31c8e91c0795cdfab82df338f172dd9bffdae43",
    "0x24d53d9f665348c12bdc3425c2b83e24fbea3b66b0c9d119146ed5d5a1d1e9f3",
    "0x1ee01a89a7ebc6b8e93f2ac2e60b9909e3e3d855852e0e113a72a118f56e2da3",
    "0x2b78c3171a3c8ec6231bb7c208e5b7c2c90a85956a7f2a1f763cb6c883059938",
    "0x07ca1e306d90787461696fc7e4a3938712312494329be76c8e2b402cc0d617e1",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1febc25f88aab92179ac3cefeea663f51562f6fc631bb236c04f5ef85b464784",
    "0x1b1b065eb60dbd39a34da94414fdfa4415933a6bdba5c2de470ad8ccef1b28fd",
    "0x0060fcebd24cc08503ac4f80c0ffb87d0898f34bdce41420e84d941b5f7d352a",
    "0x2a7b16d282447357a66d83fc5aafab7d3edbcb3f01105f193954c5ed496ae165",
    "0x0ac39f59e76b9e296ef53921ae0436ab01217493f948bf6eca12b11ce46678b5",
    "0x090b38aaae1df1873784a8966f1f62b68bbd93d34b0f4c637e208f9aeaedfc26",
    "0x1ba601baf813cb2d40ed5674747b9e3d5760143501e0f21e31a7dd44b7135eb8",
    "0x17695ec6204f10059ae5ca72c1332bc882cb7b4e161accd1ba9ef760b7365d5d",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x00ab5930a06bb6b9a78e664dc5308da0b64d1e09e6c69fa583bc737245c5a469",
    "0x16ab9a5de48bf089fba600dc70d2790ce0e8f79c1430566802f97fee43bc4e2b",
    "0x075df7d5cdb7ccc175462dfad73927bf5a5f465e15ad267930c5ec846f42ae5e",
    "0x23e4a7be74d0f0930279585aeaa432b5c28a4a2b21e3990aa45b5092f08d48ed",
    "0x298795a8af97b8b3d378279e60b276b95227e66d74e2dc66cffa1c495af98c25",
    "0x133d1455b6ea278f4acd91c65906bf75f2c90e41cdbefc2721b1e96adc5eeda7",
    "0x24b722af1967cddac6a1745b71aca7bac72d436ed464e2b8ce55aa2ad5ff3502",
    "0x276cb6e59cf4a06ff6775a537a4b04c6b42780c9c98a51ff634804b23acfac2b",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1044b0ed6b39096c0ff4d292c18632c909d1519149139b1cd192de01485dce3e",
    "0x2dc918abffffceeb34cb17a8cb532f889d7dea98e9ad2686ef8e30936ecdb03a",
    "0x2a5030937ec5690d090ad8b3d897541ecd187d2ee126fac5be6a280fbd4aa465",
    "0x016961c105f85925010e0fdd445ee840dbd3370aab933ccfcb6e4b24a8826037",
    "0x17262da0f8e41b6c42707dfbabec1d9f79ecdfdd25a32c2a640d3c5a4a3e8770",
    "0x059935903a135cffc7c5e8cb06de7a0adbc6fe4f66b07a74172eb65951c6a345",
    "0x1ea2228bc5f09dadfabf025e3d19db3cca4e448e60f2973605d2559a27b3bff8",
    "0x1e35c4737f19de2debd3760ddc81e1f5857a01c42c86f4e264ba323f4165d5ed",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x05958875cfb17091058a7e29cbfe20d0d242ecdfbd3635279cd1e0c3a1144dd8",
    "0x19fd165b2741329dc18d2a5b03d7b58eb3dcdf2c2b0870731a924387139033dd",
    "0x11cea375386801203c61577504cdc68493716d023d116356def9ad9825be5887",
    "0x2e911408231ad83ab40e44e28ee0b017a82f7e080a0d4bc1b42c52e9205ed13a",
    "0x09d3f08c1d2cd4de393b703a7dd94df0540c91b59b288df6c1ad8ba0e51f179a",
    "0x0d8bac92c12807a3fb4b20ec11e083a88b953070c08c1ae9be28c80cddb29a50",
    "0x22829b774491c0e3add8e7d2de8096cb55a1009ae9ce983b80c14972bc68b84e",
    "0x2aec91a87a1731f6b2f534955aef3d09ca7e2ee2dbdb5e9a0d15db232557c621",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x281ec503552e6778fbafd7270951cfef153fcfeca0517410e495c62b81655f9e",
    "0x098a3183f2ee18973943856c28e0dceb4392af147ca8b528ebee97577178bcf1",
    "0x0794a78e51b51af07808b643ed37bad31e6d6c68e5ef3171dcd06de598c6c29e",
    "0x214a19348cd7cc8b1f985287e637e7987a3bedfa233f98dae9774daaea42fce9",
    "0x130acc584954a9048597bda6395bd25ba02fce56102928cea7d5a6f520683ca4",
    "0x01d09e1227434a4bcf72d8e91f5419ffd6da212a1d1ccb2a51b03e80aa258243",
    "0x127397f2b156ba00d83847f03dd242007faf326271d0e2cd4f6dc84c961b19a6",
    "0x0971a3d373d35db8f181e0d7b26c33cff17e533e8f560d844694f853e7197e47",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x241c8bcc463ac96e3c1cc240ce83c44edcf9c781e258a2dad09d1976d9dc6dd6",
    "0x1a0b489baf0a182599f458897aa340e57986dcde7bfd34738851092a75ae6e0e",
    "0x102c886ce6381276fe52d15c51dbd571e94904a8ec4d4445d457d596442e443e",
    "0x289f8a46d6792691caac00cd43dde74940f122c0e5ac202588349c2eee473f6b",
    "0x2ed1721123242c33f23f809f6e431511594c10b0533afde3304ba62afc55f5ec",
    "0x0c730a9beb7b64f090a39929af4901900e772b0f817098adace287cc20dd9e84",
    "0x0480eb2f48521f46f5049f8d9d682d6f4060ff6c4190b2a22c40c27d0754b912",
    "0x221d30bbccbb39bc23ffe2c8571a8cd1763cd48de6dfe21d7d8f2805db1e5066",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x022eff0bad54cf4f8fda9e07bfdae36713527756cff255aa481b730bd286cc90",
    "0x220c6f4c23ec9272eafb522055494a1af4de6fe7456b39c5db851e1299b7a86e",
    "0x18d66b43fd01a9cc88dd14b1b5d6c0d23b29ac28775ff60d3ccf36039de0963a",
    "0x1f62901537c1c56f671fabbb4fc31fa743f3236c26f9f5c98ecbf332eda817df",
    "0x130beece629451200a3de22eab4c45bb592aad667f9fc6729842971d4a802fcc",
    "0x24411acb2c9c481c59adc41bc54fdb0fac658ed6e0b3636cdadfd12c386f8c98",
    "0x2370059923938a3552819155a8b3816fb90cbde45871f6c122c190a27e7fdc43",
    "0x217ccb823582bf7edbf4a6a64692e37928f2b02d79b43775abf304500dd2da46",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0e2be5d3f9ee73557a1c421fe42cb29bdf8f4a58679a61496bf8a5a4f9bba3be",
    "0x27639d7e461732f3baeb172103de2bc4a26708623919783fe54774153bdb59bf",
    "0x159c005b660c7fb3551cbf624aadcec047ce72625673c866c5fb289f8c865fff",
    "0x130d38734b549e833b50c550a90580c53248bb96731c0921ad6373316dfdaa8c",
    "0x13ee4afd14334602b6791a7b8f49c4f4979d485b8d1b1119cb4a2a7c31a74f39",
    "0x2d2647b74c63579e81a6270afc73e636e588996745ac0499dbeb6a7cf80a889e",
    "0x1b884086fa3c4173be0fd5cb1c866c87e0f9ae4c3d9f1e3df630cb4c2fa59af5",
    "0x2289328b5db5b2b2d00e76ff78815696e77eb19acdcb6c84279e65fcce29d15d",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x0bbd293300c70f612c8f5b7bcc6c4106246d2f713df02774a29742c31efeb4ae",
    "0x278e2893fbb5d590fe623652e50086d58ab18d3015a59d6a61602b409252ec2b",
    "0x2fcc41f73df0c835b0b514cbdd469af1e2b494f05269d15a6343af34668b18c9",
    "0x0378097f57525674b961d42a2f57a937c1fecaba4c673bdce345050d981b8fe0",
    "0x15a6727e6f181a5da795ce173f1889e07f12892e13f889c4f8f6c71725ab9f62",
    "0x1edc3a58673d364ba5906c3b39ff7f654c5d42f4ff94e6e75d2c500842846477",
    "0x01aeddbe743c87ec10fe447a5d08ab5c73836eb214ef95a08ce91131b8e1a7f8",
    "0x286e544456f114ce609d6b805b31064ab65482585699c91b9b3e83a75ca386b3",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x1477e88daf9348ea5f95cb08426f4285c654a897a2c4895333052fe2cdba34cb",
    "0x0c9918bbd089bc26c937ae2e0a92a1d8c87cf4480b055e43831a5e6a3acbe5b5",
    "0x283c24f7bedf789f31465682347ff86b4c0fbb7f9aacbe5630021b41532f7931",
    "0x0b1e5f0ca68bafaf026438a4682a55c1df5d387c4c5f3e111ead3163eb5b2754",
    "0x2d9da1df21f14ce401ff84b99fba07311a9da3cd7efc200695ab55b1233b9043",
    "0x0bb61e50ddc0821f0c03b3bed9476f580a02157b6a69a17f2afb0eff5f1e2a37",
    "0x21dc1358f62ff3dc24cfc896fdfbae88b0074323dfc7b36d680edba89c470e4b",
    "0x0dc75868b6f7e6ec9c26221637eb789b9e4c2b892ce81b527c7da05627ec2dc8",
    "0x251e7fdf99591080080b0af133b9e4369f22e57ace3cd7f64fc6fdbcf38d7da1",
    "0x08606e28acd8b2ee4c23a757886d7e99e407d177a58fb31b410ead7fbe1ef272",
    "0x2f70d379513ce458231a8ee6b3029bcbbb4860ef48c104ddcffe65603d81592d",
    "0x15315ba38b9e4c7a64a0844985e7b45db39eaec4c63b490cecfb19f02e102669",
    "0x2a1529e4b1ca0cee97cde58af1536c4823f7e558bdc13f774e4ef3ec8454675b",
    "0x2a70b9f1d4bbccdbc03e17c1d1dcdb02052903dc6609ea6969f661b2eb74c839",
    "0x2f69a7198e1fbcc7dea43265306a37ed55b91bff652ad69aa4fa8478970d401d",
    "0x0c3f050a6bf5af151981e55e3e1a29a13c3ffa4550bd2514f1afd6c5f721f830",
    "0x2a20e3a4a0e57d92f97c9d6186c6c3ea7c5e55c20146259be2f78c2ccc2e3595",
];
